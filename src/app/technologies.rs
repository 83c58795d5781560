use leptos::{html, prelude::*};

use crate::content::{marquee, SKILLS};
use crate::nav::Section;
use crate::reveal::TECHNOLOGIES_TIMING;

use super::animate::{use_section_reveal, Entrance};

#[component]
pub fn Technologies() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref, TECHNOLOGIES_TIMING);
    let stagger = TECHNOLOGIES_TIMING.stagger;

    view! {
        <section
            node_ref=section_ref
            id=Section::Technologies.id()
            class="py-20 bg-gradient-to-br from-slate-900 to-gray-900 relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_20%_50%,rgba(34,197,94,0.05),transparent_50%)]"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class=Entrance::FadeUp.class("transition-all duration-1000 ease-out", reveal.visible)>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">
                            "Tecnologías y " <span class="text-green-400">"Herramientas"</span>
                        </h2>
                        <p class="text-lg text-gray-400 max-w-3xl mx-auto">
                            "Las herramientas que utilizo para construir soluciones backend"
                        </p>
                    </div>

                    <div class="relative overflow-hidden mb-16">
                        <div class="absolute left-0 top-0 bottom-0 w-24 bg-gradient-to-r from-slate-900 to-transparent z-10"></div>
                        <div class="absolute right-0 top-0 bottom-0 w-24 bg-gradient-to-l from-slate-900 to-transparent z-10"></div>

                        <div class="flex gap-6 animate-scroll w-max">
                            {marquee()
                                .map(|(_, tech)| {
                                    view! {
                                        <div class="flex-shrink-0 flex items-center gap-3 bg-gradient-to-br from-gray-800/50 to-gray-900/50 px-6 py-4 rounded-xl border border-green-800/30 backdrop-blur-sm hover:border-green-600/50 transition-colors duration-300">
                                            <span class="text-2xl">{tech.icon}</span>
                                            <span class="text-white font-medium whitespace-nowrap">
                                                {tech.name}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="grid md:grid-cols-3 gap-6">
                        {SKILLS
                            .iter()
                            .enumerate()
                            .map(|(index, skill)| {
                                view! {
                                    <div
                                        class=Entrance::FadeUp
                                            .class(
                                                "bg-gradient-to-br from-gray-800/50 to-green-900/20 p-6 rounded-2xl border border-green-800/30 backdrop-blur-sm hover:border-green-600/50 hover:shadow-xl hover:shadow-green-900/20 transition-all duration-500 hover:scale-105",
                                                reveal.children,
                                            )
                                        style=stagger.map(|s| s.css(index)).unwrap_or_default()
                                    >
                                        <h3 class="text-xl font-bold text-green-400 mb-3">{skill.title}</h3>
                                        <p class="text-gray-400">{skill.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
