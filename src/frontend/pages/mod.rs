mod home;
mod join_us;
mod projects;

pub use home::Home;
pub use join_us::{Contributor, ExistingProject, JoinUs, Maintainer, NewProject};
pub use projects::Projects;
