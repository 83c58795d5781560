use leptos::{html, prelude::*};

use crate::content::HIGHLIGHTS;
use crate::nav::Section;
use crate::reveal::ABOUT_TIMING;

use super::animate::{use_section_reveal, Entrance};

const HIGHLIGHT_ICONS: [&str; 4] = ["</>", "◎", "👥", "🎓"];

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref, ABOUT_TIMING);
    let stagger = ABOUT_TIMING.stagger;

    view! {
        <section
            node_ref=section_ref
            id=Section::About.id()
            class="py-20 bg-gradient-to-br from-slate-900 to-gray-900 relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_30%_80%,rgba(34,197,94,0.05),transparent_50%)]"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class=Entrance::FadeUp.class("transition-all duration-1000 ease-out", reveal.visible)>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">
                            "Sobre " <span class="text-green-400">"mí"</span>
                        </h2>
                        <p class="text-lg text-gray-400 max-w-3xl mx-auto">
                            "Actualmente sigo formándome como ingeniero informático, combinando teoría y práctica en proyectos reales."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-2 gap-12 items-center mb-16">
                        <div class=Entrance::FromLeft
                            .class("transition-all duration-1000 delay-300 ease-out", reveal.visible)>
                            <h3 class="text-2xl font-bold text-white mb-6">"Mi Trayectoria"</h3>
                            <div class="space-y-6">
                                <Milestone
                                    title="Estudiante de Ingeniería Informática"
                                    detail="Actualmente cursando la carrera, enfocándome en desarrollo backend"
                                />
                                <Milestone
                                    title="Técnico Medio en Sistemas Informáticos"
                                    detail="Base sólida en fundamentos de programación y sistemas"
                                />
                            </div>
                        </div>

                        <div class=Entrance::FromRight
                            .class(
                                "bg-gradient-to-br from-gray-800/50 to-green-900/20 p-8 rounded-2xl border border-green-800/30 backdrop-blur-sm transition-all duration-1000 delay-500 ease-out",
                                reveal.visible,
                            )>
                            <h3 class="text-2xl font-bold text-white mb-6">"Mi Enfoque"</h3>
                            <p class="text-gray-300 leading-relaxed">
                                "Me apasiona crear soluciones backend robustas y eficientes. Creo firmemente en la importancia del código limpio, las buenas prácticas y la colaboración en equipo. Cada proyecto es una oportunidad para aprender y mejorar mis habilidades técnicas."
                            </p>
                        </div>
                    </div>

                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {HIGHLIGHTS
                            .iter()
                            .zip(HIGHLIGHT_ICONS)
                            .enumerate()
                            .map(|(index, (highlight, icon))| {
                                view! {
                                    <div
                                        class=Entrance::FadeUp
                                            .class(
                                                "bg-gradient-to-br from-gray-800/50 to-gray-900/50 p-6 rounded-xl border border-green-800/30 backdrop-blur-sm hover:border-green-600/50 hover:shadow-lg hover:shadow-green-900/20 transition-all duration-500 hover:scale-105",
                                                reveal.children,
                                            )
                                        style=stagger.map(|s| s.css(index)).unwrap_or_default()
                                    >
                                        <div class="w-12 h-12 bg-gradient-to-br from-green-600/20 to-green-800/20 rounded-lg flex items-center justify-center mb-4 border border-green-700/30 text-green-400">
                                            {icon}
                                        </div>
                                        <h4 class="font-semibold text-white mb-2">{highlight.title}</h4>
                                        <p class="text-gray-400 text-sm">{highlight.description}</p>
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

#[component]
fn Milestone(title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4 group">
            <div class="w-3 h-3 bg-green-500 rounded-full mt-2 flex-shrink-0 group-hover:scale-125 transition-transform duration-300"></div>
            <div>
                <h4 class="font-semibold text-green-400 group-hover:text-green-300 transition-colors duration-300">
                    {title}
                </h4>
                <p class="text-gray-400">{detail}</p>
            </div>
        </div>
    }
}
