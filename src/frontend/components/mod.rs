pub mod icons;
pub mod pagination_buttons;
pub mod project_card;

pub use pagination_buttons::PaginationButtons;
pub use project_card::ProjectCard;
