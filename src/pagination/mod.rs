//! Pagination model for the portal's list controls.
//!
//! The pagination control itself is a pure view over a [`PaginationState`]:
//! it renders four affordances and reports the page a user asked for through
//! a [`PageChangeSink`]. Everything the browser component decides lives here
//! so it can be exercised without a DOM.

mod params;
mod sink;
mod state;
#[cfg(test)]
mod state_test;

pub use params::{PageParamError, clamp_page, last_page_for, page_slice, parse_page_param};
#[cfg(test)]
pub use sink::MockPageChangeSink;
pub use sink::{PageChangeSink, dispatch};
pub use state::{PageAction, PaginationState};
