use githubsrm_portal::catalog::Project;
use leptos::prelude::*;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let repository = project.repository.clone();

    view! {
        <div class="bg-ctp-surface0 border border-ctp-surface1 rounded-lg p-4 hover:border-base-green transition-colors">
            <h3 class="text-xl font-semibold text-ctp-text break-all mb-2">{project.name.clone()}</h3>
            <p class="text-ctp-subtext0 text-sm mb-3">{project.description.clone()}</p>

            {(!project.tags.is_empty())
                .then(|| {
                    view! {
                        <div class="flex flex-wrap gap-2 mb-2">
                            {project
                                .tags
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <span class="bg-ctp-surface1 text-ctp-subtext1 text-xs px-2 py-1 rounded">
                                            {tag.clone()}
                                        </span>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })}

            <a
                href=repository
                target="_blank"
                rel="noopener noreferrer"
                class="text-xs text-base-green hover:underline break-all"
            >
                {project.repository}
            </a>
        </div>
    }
}
