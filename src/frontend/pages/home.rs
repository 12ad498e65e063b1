use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::use_portal_config;

#[component]
pub fn Home() -> impl IntoView {
    let config = use_portal_config();

    view! {
        <div class="container mx-auto p-6">
            <h2 class="text-3xl font-bold text-ctp-text mb-4">"Welcome to " {config.site_title}</h2>
            <p class="text-ctp-subtext0 mb-6">
                "Open source projects built and maintained by students."
            </p>
            <div class="flex gap-4">
                <A href="/projects" attr:class="bg-base-teal text-white rounded-lg px-6 py-3 font-medium">
                    "Browse projects"
                </A>
                <A href="/join-us" attr:class="bg-base-teal text-white rounded-lg px-6 py-3 font-medium">
                    "Join us"
                </A>
            </div>
        </div>
    }
}
