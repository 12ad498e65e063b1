//! The output side of the pagination control.

use log::debug;

use super::state::{PageAction, PaginationState};

#[cfg(test)]
use mockall::automock;

/// Receiver of the page a user asked to navigate to. Can be mocked in tests.
#[cfg_attr(test, automock)]
pub trait PageChangeSink {
    fn page_change(&self, page: usize);
}

impl<F> PageChangeSink for F
where
    F: Fn(usize),
{
    fn page_change(&self, page: usize) {
        self(page)
    }
}

/// Click handler shared by all four affordances.
///
/// Emits to `sink` only when `action` is enabled for `state`. The DOM
/// `disabled` attribute is not relied upon: other renderers give no such
/// guarantee.
pub fn dispatch<S>(state: &PaginationState, action: PageAction, sink: &S) -> Option<usize>
where
    S: PageChangeSink + ?Sized,
{
    match state.target(action) {
        Some(page) => {
            debug!("pagination: {:?} -> page {}", action, page);
            sink.page_change(page);
            Some(page)
        }
        None => {
            debug!(
                "pagination: ignored disabled {:?} on page {}",
                action, state.current_page
            );
            None
        }
    }
}
