use githubsrm_portal::catalog::embedded_catalog;
use githubsrm_portal::pagination::{last_page_for, page_slice};
use leptos::prelude::*;
use leptos_meta::Title;
use log::error;

use crate::app::use_portal_config;
use crate::components::{PaginationButtons, ProjectCard};
use crate::hooks::use_pagination;

#[component]
pub fn Projects() -> impl IntoView {
    let page_size = use_portal_config().page_size;

    let projects = embedded_catalog().unwrap_or_else(|err| {
        error!("{}", err);
        Vec::new()
    });
    let total = projects.len();
    let projects = StoredValue::new(projects);

    let pagination = use_pagination(Signal::stored(last_page_for(total, page_size)));
    let page = pagination.page;

    view! {
        <div class="container mx-auto p-6">
            <Title text="Projects"/>
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-3xl font-bold text-ctp-text">"Projects"</h2>
            </div>

            {move || {
                if total == 0 {
                    return view! {
                        <p class="text-ctp-subtext0">"No projects yet. Be the first to start one!"</p>
                    }
                        .into_any();
                }

                let offset = (page.get() - 1) * page_size;
                let end = (offset + page_size).min(total);

                view! {
                    <div>
                        <div class="text-sm text-ctp-overlay0 mb-4">
                            "Showing " {offset + 1} " - " {end} " of " {total} " projects"
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 mb-6 auto-rows-fr">
                            {projects
                                .with_value(|projects| {
                                    page_slice(projects, page.get(), page_size)
                                        .iter()
                                        .map(|project| view! { <ProjectCard project=project.clone()/> })
                                        .collect::<Vec<_>>()
                                })}
                        </div>
                    </div>
                }
                    .into_any()
            }}

            <PaginationButtons state=pagination.state on_page_change=pagination.on_page_change/>
        </div>
    }
}
