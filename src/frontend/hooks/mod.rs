//! Reusable hooks for common UI patterns

mod use_pagination;

pub use use_pagination::*;
