use githubsrm_portal::pagination::{PageAction, PaginationState, dispatch};
use leptos::prelude::*;

use crate::components::icons::{ChevronLeft, ChevronRight, Next, Previous};

const ENABLED_CLASS: &str = "p-3 rounded-full text-ctp-text hover:bg-base-green focus:bg-base-green";
const DISABLED_CLASS: &str = "p-3 rounded-full text-ctp-text opacity-10 cursor-not-allowed";

/// Four-button page navigation: first, previous, next, last.
///
/// Holds no state of its own. `state` comes from the owner of the list on
/// every render and the requested page is reported through
/// `on_page_change`; the owner decides what to do with it.
///
/// # Props
/// - `state`: Signal<PaginationState> - current page, last page and which directions are open
/// - `on_page_change`: Callback<usize> - called with the requested page
#[component]
pub fn PaginationButtons(
    /// Pagination snapshot supplied by the list owner
    #[prop(into)]
    state: Signal<PaginationState>,
    /// Callback receiving the requested page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center">
            <PageButton action=PageAction::First state=state on_page_change=on_page_change>
                <ChevronLeft/>
            </PageButton>
            <PageButton action=PageAction::Previous state=state on_page_change=on_page_change>
                <Previous/>
            </PageButton>

            <h2 class="text-ctp-text text-4xl font-medium mx-3">
                {move || state.get().page_label()}
            </h2>

            <PageButton action=PageAction::Next state=state on_page_change=on_page_change>
                <Next/>
            </PageButton>
            <PageButton action=PageAction::Last state=state on_page_change=on_page_change>
                <ChevronRight/>
            </PageButton>
        </div>
    }
}

#[component]
fn PageButton(
    action: PageAction,
    state: Signal<PaginationState>,
    on_page_change: Callback<usize>,
    children: Children,
) -> impl IntoView {
    let enabled = move || action.is_enabled(&state.get());

    let on_click = move |_| {
        // dispatch drops disabled actions even if the attribute is bypassed
        let sink = |page: usize| on_page_change.run(page);
        dispatch(&state.get_untracked(), action, &sink);
    };

    view! {
        <button
            type="button"
            title=action.label()
            aria-label=action.label()
            disabled=move || !enabled()
            class=move || if enabled() { ENABLED_CLASS } else { DISABLED_CLASS }
            on:click=on_click
        >
            <span class="text-2xl font-extrabold">{children()}</span>
        </button>
    }
}
