//! Stateless icon glyphs used by the navigation controls.

use leptos::prelude::*;

const ICON_CLASS: &str = "w-6 h-6";

/// Double chevron pointing left (jump to first).
#[component]
pub fn ChevronLeft() -> impl IntoView {
    view! {
        <svg class=ICON_CLASS viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <polyline points="11 17 6 12 11 7"/>
            <polyline points="18 17 13 12 18 7"/>
        </svg>
    }
}

/// Double chevron pointing right (jump to last).
#[component]
pub fn ChevronRight() -> impl IntoView {
    view! {
        <svg class=ICON_CLASS viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <polyline points="13 17 18 12 13 7"/>
            <polyline points="6 17 11 12 6 7"/>
        </svg>
    }
}

#[component]
pub fn Previous() -> impl IntoView {
    view! {
        <svg class=ICON_CLASS viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <polyline points="15 18 9 12 15 6"/>
        </svg>
    }
}

#[component]
pub fn Next() -> impl IntoView {
    view! {
        <svg class=ICON_CLASS viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <polyline points="9 18 15 12 9 6"/>
        </svg>
    }
}
