//! The "join us" flow: pick a role, then pick how to get involved.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

const CHOICE_CLASS: &str =
    "block bg-base-teal text-white rounded-lg text-xl py-5 font-medium text-center";
const INLINE_LINK_CLASS: &str = "text-base-green font-bold hover:underline";

#[component]
fn RoleHeader(
    title: &'static str,
    subtitle: &'static str,
    /// Role offered as an alternative, as (label, path)
    other_role: (&'static str, &'static str),
) -> impl IntoView {
    let (other_label, other_path) = other_role;

    view! {
        <div>
            <div class="font-medium">
                <h1 class="text-4xl text-ctp-text">{title}</h1>
                <h2 class="text-xl mt-2 text-ctp-subtext1">{subtitle}</h2>
            </div>

            <p class="text-right text-lg mt-3 text-ctp-subtext0">
                "Join us as a "
                <A href=other_path attr:class=INLINE_LINK_CLASS>
                    {other_label}
                </A>
            </p>
        </div>
    }
}

#[component]
pub fn JoinUs() -> impl IntoView {
    view! {
        <div class="container mx-auto p-6">
            <Title text="Join us"/>
            <h1 class="text-4xl font-medium text-ctp-text">"Join us"</h1>
            <p class="text-xl mt-2 text-ctp-subtext1">"How would you like to take part?"</p>

            <div class="grid grid-cols-1 gap-4 lg:grid-cols-2 w-full lg:w-8/12 mx-auto mt-10 mb-10">
                <A href="/join-us/maintainer" attr:class=CHOICE_CLASS>
                    "Maintainer"
                </A>
                <A href="/join-us/contributor" attr:class=CHOICE_CLASS>
                    "Contributor"
                </A>
            </div>
        </div>
    }
}

#[component]
pub fn Maintainer() -> impl IntoView {
    view! {
        <div class="container mx-auto p-6">
            <Title text="Maintainer"/>
            <RoleHeader
                title="Maintainer"
                subtitle="Maintain and manage projects"
                other_role=("Contributor", "/join-us/contributor")
            />

            <div class="text-center">
                <p class="text-xl lg:text-4xl font-semibold text-base-blue my-5">
                    "Please Choose One below"
                </p>
                <div class="grid items-center grid-cols-1 gap-1 lg:grid-cols-3 w-full lg:w-8/12 mx-auto mt-10 mb-10">
                    <A href="/join-us/maintainer/new-project" attr:class=CHOICE_CLASS>
                        "New Project"
                    </A>

                    <span/>

                    <A href="/join-us/maintainer/existing-project" attr:class=CHOICE_CLASS>
                        "Existing Project"
                    </A>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Contributor() -> impl IntoView {
    view! {
        <div class="container mx-auto p-6">
            <Title text="Contributor"/>
            <RoleHeader
                title="Contributor"
                subtitle="Contribute to projects you care about"
                other_role=("Maintainer", "/join-us/maintainer")
            />

            <div class="text-center">
                <p class="text-xl lg:text-2xl font-semibold text-base-blue my-5">
                    "Pick a project from the showcase and reach out to its maintainers."
                </p>
                <A href="/projects" attr:class="inline-block bg-base-teal text-white rounded-lg text-xl px-8 py-5 font-medium">
                    "Browse projects"
                </A>
            </div>
        </div>
    }
}

#[component]
pub fn NewProject() -> impl IntoView {
    view! {
        <div class="container mx-auto p-6">
            <Title text="New Project"/>
            <h2 class="text-3xl font-bold text-ctp-text mb-4">"New Project"</h2>
            <p class="text-ctp-subtext0">
                "Start a new project under the community organisation. Applications open each semester."
            </p>
            <p class="mt-4">
                <A href="/join-us/maintainer" attr:class=INLINE_LINK_CLASS>"Back"</A>
            </p>
        </div>
    }
}

#[component]
pub fn ExistingProject() -> impl IntoView {
    view! {
        <div class="container mx-auto p-6">
            <Title text="Existing Project"/>
            <h2 class="text-3xl font-bold text-ctp-text mb-4">"Existing Project"</h2>
            <p class="text-ctp-subtext0">
                "Join the maintainers of a project that is already part of the showcase."
            </p>
            <p class="mt-4">
                <A href="/join-us/maintainer" attr:class=INLINE_LINK_CLASS>"Back"</A>
            </p>
        </div>
    }
}
