use leptos::{html, prelude::*};

use crate::content::{Project, PROJECTS, SAFE_LINK_REL};
use crate::nav::Section;
use crate::reveal::PROJECTS_TIMING;
use crate::selection::ProjectSelection;

use super::animate::{use_section_reveal, Entrance};

/// Technologies shown on a card before the `+N` badge.
const CARD_TECH_LIMIT: usize = 3;

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref, PROJECTS_TIMING);
    let selection = RwSignal::new(ProjectSelection::default());
    let stagger = PROJECTS_TIMING.stagger;

    view! {
        <section
            node_ref=section_ref
            id=Section::Projects.id()
            class="py-20 bg-gradient-to-br from-gray-900 via-slate-900 to-green-900/20 relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_70%_20%,rgba(34,197,94,0.05),transparent_50%)]"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class=Entrance::FadeUp.class("transition-all duration-1000 ease-out", reveal.visible)>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">
                            "Proyectos " <span class="text-green-400">"Destacados"</span>
                        </h2>
                        <p class="text-lg text-gray-400 max-w-3xl mx-auto">
                            "Una selección de proyectos que demuestran mis habilidades en desarrollo backend"
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-6 auto-rows-fr">
                        {PROJECTS
                            .iter()
                            .enumerate()
                            .map(|(index, project)| {
                                view! {
                                    <ProjectCard
                                        project
                                        shown=reveal.children
                                        delay=stagger.map(|s| s.css(index)).unwrap_or_default()
                                        on_open=move || selection.update(|s| s.select(project.id))
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            {move || {
                selection
                    .with(ProjectSelection::project)
                    .map(|project| view! { <ProjectDetail project selection /> })
            }}
        </section>
    }
}

#[component]
fn ProjectCard<F>(
    project: &'static Project,
    shown: Signal<bool>,
    delay: String,
    on_open: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    let (preview, hidden) = project.tech_preview(CARD_TECH_LIMIT);
    let base = format!(
        "{} bg-gradient-to-br from-gray-800/50 to-gray-900/50 rounded-2xl border border-green-800/30 backdrop-blur-sm hover:border-green-600/50 hover:shadow-xl hover:shadow-green-900/20 transition-all duration-500 overflow-hidden group cursor-pointer hover:scale-[1.02]",
        project.size.grid_class(),
    );

    view! {
        <div
            class=move || format!("{base} {}", Entrance::FadeUp.classes(shown.get()))
            style=delay
            on:click=move |_| on_open()
        >
            <div class="relative h-48 bg-gradient-to-br from-green-900/20 to-gray-800/50 flex items-center justify-center overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-gray-900/80 via-transparent to-transparent group-hover:from-gray-900/60 transition-all duration-500 flex items-center justify-center">
                    <span class="text-5xl text-green-400 opacity-0 group-hover:opacity-100 transition-all duration-500 transform scale-75 group-hover:scale-100">
                        "▶"
                    </span>
                </div>
            </div>

            <div class="p-6">
                <h3 class="text-xl font-bold text-white mb-2 group-hover:text-green-400 transition-colors duration-300">
                    {project.title}
                </h3>
                <p class="text-gray-400 mb-4 line-clamp-3">{project.description}</p>

                <div class="flex flex-wrap gap-2">
                    {preview
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-green-900/30 text-green-400 text-sm rounded-full border border-green-800/50">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                    {(hidden > 0)
                        .then(|| {
                            view! {
                                <span class="px-3 py-1 bg-gray-800/50 text-gray-400 text-sm rounded-full border border-gray-700/50">
                                    {format!("+{hidden}")}
                                </span>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

/// Overlay for the selected project. Rendered for at most one project.
#[component]
fn ProjectDetail(project: &'static Project, selection: RwSignal<ProjectSelection>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black/80 backdrop-blur-sm flex items-center justify-center p-4 z-50">
            <div class="bg-gradient-to-br from-gray-800 to-gray-900 rounded-2xl max-w-4xl w-full max-h-[90vh] overflow-y-auto border border-green-800/30">
                <div class="relative">
                    <button
                        on:click=move |_| selection.update(ProjectSelection::close)
                        class="absolute top-4 right-4 z-10 bg-gray-800/80 hover:bg-gray-700 rounded-full p-2 transition-colors duration-200 border border-green-800/30 text-gray-300"
                        aria-label="Cerrar"
                    >
                        "✕"
                    </button>

                    <div class="relative h-64 md:h-80 bg-gradient-to-br from-green-900/20 to-gray-800/50 overflow-hidden">
                        <img src=project.image alt=project.title class="w-full h-full object-cover" />
                        <div class="absolute inset-0 bg-gradient-to-t from-gray-900/80 to-transparent"></div>
                    </div>

                    <div class="p-8">
                        <h3 class="text-3xl font-bold text-white mb-4">{project.title}</h3>
                        <p class="text-gray-300 mb-6 leading-relaxed">{project.description}</p>

                        <div class="mb-6">
                            <h4 class="text-lg font-semibold text-green-400 mb-3">
                                "Tecnologías utilizadas"
                            </h4>
                            <div class="flex flex-wrap gap-2">
                                {project
                                    .technologies
                                    .iter()
                                    .map(|tech| {
                                        view! {
                                            <span class="px-4 py-2 bg-green-900/30 text-green-400 rounded-full font-medium border border-green-800/50">
                                                {*tech}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="mb-6">
                            <h4 class="text-lg font-semibold text-green-400 mb-3">"Logros del proyecto"</h4>
                            <p class="text-gray-300 bg-gradient-to-r from-green-900/20 to-gray-800/20 p-4 rounded-lg border border-green-800/30">
                                {project.achievement}
                            </p>
                        </div>

                        <div class="flex gap-4">
                            {project
                                .repository_url
                                .map(|href| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel=SAFE_LINK_REL
                                            class="inline-flex items-center gap-2 bg-gray-800 text-white px-6 py-3 rounded-lg hover:bg-gray-700 transition-colors duration-200 border border-gray-700"
                                        >
                                            "Ver Código"
                                        </a>
                                    }
                                })}
                            {project
                                .live_url
                                .map(|href| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel=SAFE_LINK_REL
                                            class="inline-flex items-center gap-2 bg-gradient-to-r from-green-600 to-green-700 text-white px-6 py-3 rounded-lg hover:from-green-700 hover:to-green-800 transition-colors duration-200"
                                        >
                                            "Ver Demo"
                                        </a>
                                    }
                                })}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
