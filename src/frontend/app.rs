use githubsrm_portal::config::PortalConfig;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{A, Route, Router, Routes},
    hooks::use_location,
    path,
};
use log::error;
use thaw::*;

use crate::pages::{Contributor, ExistingProject, Home, JoinUs, Maintainer, NewProject, Projects};

/// Portal configuration provided to every page.
pub fn use_portal_config() -> PortalConfig {
    use_context::<PortalConfig>().unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PortalConfig::embedded().unwrap_or_else(|err| {
        error!("{}; falling back to defaults", err);
        PortalConfig::default()
    });
    provide_context(config);

    // Set dark theme for Thaw UI components
    let theme = RwSignal::new(Theme::dark());

    view! {
        <ConfigProvider theme>
            <Router>
                <NavAndContent/>
            </Router>
        </ConfigProvider>
    }
}

#[component]
fn NavAndContent() -> impl IntoView {
    let config = use_portal_config();
    let location = use_location();

    // Determine active tab based on current path
    let is_active = move |path: &str| {
        let current = location.pathname.get();
        if path == "/" {
            current == "/"
        } else {
            current.starts_with(path)
        }
    };

    view! {
        <Title text=config.site_title.clone()/>
        <main class="min-h-screen bg-ctp-base flex flex-col">
            <nav class="bg-ctp-surface0 border-b border-ctp-surface1">
                <div class="container mx-auto flex justify-between items-center px-6 py-4">
                    <A href="/" attr:class="text-3xl font-bold text-base-green">
                        {config.site_title.clone()}
                    </A>
                    <div class="flex gap-2 items-center">
                        <a href="/projects"
                            class="px-4 py-2 rounded-lg font-medium transition-colors"
                            class:bg-ctp-surface2=move || is_active("/projects")
                            class:text-ctp-text=move || is_active("/projects")
                            class:text-ctp-subtext1=move || !is_active("/projects")
                            class:hover:bg-ctp-surface1=move || !is_active("/projects")>
                            "Projects"
                        </a>
                        <a href="/join-us"
                            class="px-4 py-2 rounded-lg font-medium transition-colors"
                            class:bg-ctp-surface2=move || is_active("/join-us")
                            class:text-ctp-text=move || is_active("/join-us")
                            class:text-ctp-subtext1=move || !is_active("/join-us")
                            class:hover:bg-ctp-surface1=move || !is_active("/join-us")>
                            "Join us"
                        </a>
                    </div>
                </div>
            </nav>

            <div class="flex-1">
                <Routes fallback=|| view! { <p class="container mx-auto p-6 text-ctp-subtext0">"Page not found"</p> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/projects") view=Projects/>
                    <Route path=path!("/join-us") view=JoinUs/>
                    <Route path=path!("/join-us/maintainer") view=Maintainer/>
                    <Route path=path!("/join-us/maintainer/new-project") view=NewProject/>
                    <Route path=path!("/join-us/maintainer/existing-project") view=ExistingProject/>
                    <Route path=path!("/join-us/contributor") view=Contributor/>
                </Routes>
            </div>

            <footer class="py-6 px-6 border-t border-ctp-surface1 bg-ctp-surface0">
                <div class="container mx-auto text-center text-sm text-ctp-subtext0">
                    <p>
                        "© " {
                            let date = web_sys::js_sys::Date::new_0();
                            date.get_full_year()
                        } " githubsrm community"
                    </p>
                    {config.contact_email.clone().map(|email| {
                        view! {
                            <p class="mt-1 text-xs text-ctp-overlay0">
                                <a href=format!("mailto:{}", email) class="hover:underline">{email.clone()}</a>
                            </p>
                        }
                    })}
                    <p class="mt-1 text-xs text-ctp-overlay0">
                        "portal v" {env!("CARGO_PKG_VERSION")}
                    </p>
                </div>
            </footer>
        </main>
    }
}
