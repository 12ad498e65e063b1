use githubsrm_portal::pagination::{PaginationState, clamp_page, parse_page_param};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};
use log::warn;

/// Return type for use_pagination hook
pub struct UsePaginationReturn {
    /// Current 1-based page, clamped to `last_page`
    pub page: Signal<usize>,
    pub state: Signal<PaginationState>,
    pub on_page_change: Callback<usize>,
}

/// Hook for managing pagination state, kept in the `?page=` query parameter
/// so a page survives reloads and can be linked to.
///
/// # Example
/// ```rust
/// let pagination = use_pagination(last_page);
///
/// view! {
///     <PaginationButtons
///         state=pagination.state
///         on_page_change=pagination.on_page_change
///     />
/// }
/// ```
pub fn use_pagination(last_page: Signal<usize>) -> UsePaginationReturn {
    let query = use_query_map();
    let location = use_location();
    let navigate = StoredValue::new_local(use_navigate());

    let requested = Memo::new(move |_| {
        let raw = query.with(|params| params.get("page"));
        parse_page_param(raw.as_deref()).unwrap_or_else(|err| {
            warn!("{}; showing page 1", err);
            1
        })
    });

    let page = Signal::derive(move || clamp_page(requested.get(), last_page.get()));

    let state = Signal::derive(move || PaginationState::from_bounds(page.get(), last_page.get()));

    let on_page_change = Callback::new(move |new_page: usize| {
        let path = location.pathname.get_untracked();
        navigate.with_value(|navigate| {
            navigate(&format!("{}?page={}", path, new_page), NavigateOptions::default());
        });
    });

    UsePaginationReturn {
        page,
        state,
        on_page_change,
    }
}
