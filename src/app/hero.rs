use leptos::prelude::*;

use crate::content::{
    GITHUB_URL, MAILTO, OWNER_INITIALS, OWNER_NAME, OWNER_ROLE, OWNER_SURNAME, SAFE_LINK_REL,
};
use crate::nav::Section;
use crate::particles::{self, Particle, PARTICLE_COUNT};
use crate::reveal::{Reveal, HERO_DELAY};
use crate::timers::Timers;

use super::animate::Entrance;

#[component]
pub fn Hero() -> impl IntoView {
    let timers = Timers::new();
    let reveal = RwSignal::new(Reveal::new());
    let particles = RwSignal::new(Vec::<Particle>::new());

    // Client only: random positions would not survive hydration, and this
    // effect has no dependencies so it never re-runs.
    Effect::new(move |_| {
        particles.set(particles::generate(&mut rand::thread_rng(), PARTICLE_COUNT));
        timers.schedule(HERO_DELAY, move || {
            reveal.update(|r| {
                r.show();
            })
        });
    });

    let visible = Signal::derive(move || reveal.with(Reveal::is_visible));

    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center pt-16 relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-gray-900 via-slate-900 to-green-900"></div>
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_50%_50%,rgba(34,197,94,0.1),transparent_70%)]"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center">
                    <div class=Entrance::FadeUp.class("transition-all duration-1000 ease-out", visible)>
                        <div class="mb-8">
                            <div class=Entrance::Pop
                                .class(
                                    "w-32 h-32 mx-auto mb-6 rounded-full bg-gradient-to-br from-green-500 to-green-700 flex items-center justify-center text-white text-4xl font-bold shadow-2xl shadow-green-900/50 transition-all duration-1000 delay-300",
                                    visible,
                                )>{OWNER_INITIALS}</div>
                        </div>

                        <h1 class=Entrance::FadeUp
                            .class(
                                "text-4xl md:text-6xl font-bold text-white mb-4 transition-all duration-1000 delay-500",
                                visible,
                            )>
                            {OWNER_NAME}
                            <span class="block bg-gradient-to-r from-green-400 to-green-600 bg-clip-text text-transparent">
                                {OWNER_SURNAME}
                            </span>
                        </h1>

                        <p class=Entrance::FadeUp
                            .class(
                                "text-xl md:text-2xl text-green-400 mb-6 transition-all duration-1000 delay-700",
                                visible,
                            )>{OWNER_ROLE}</p>

                        <p class=Entrance::FadeUp
                            .class(
                                "text-lg text-gray-300 max-w-3xl mx-auto mb-8 leading-relaxed transition-all duration-1000 delay-[900ms]",
                                visible,
                            )>
                            "Soy un desarrollador backend con una sólida base técnica, apasionado por construir APIs robustas, eficientes y seguras. Me destaco por escribir código limpio, aplicar buenas prácticas y trabajar en equipo."
                        </p>

                        <div class=Entrance::FadeUp
                            .class(
                                "flex flex-wrap justify-center gap-4 mb-8 transition-all duration-1000 delay-[1100ms]",
                                visible,
                            )>
                            <div class="flex items-center gap-2 text-gray-400 bg-gray-800/50 px-4 py-2 rounded-full border border-gray-700">
                                <span class="text-green-500">"📍"</span>
                                <span>"Español (Nativo)"</span>
                            </div>
                            <div class="flex items-center gap-2 text-gray-400 bg-gray-800/50 px-4 py-2 rounded-full border border-gray-700">
                                <span class="text-green-500">"🌐"</span>
                                <span>"Inglés (A2)"</span>
                            </div>
                        </div>

                        <div class=Entrance::FadeUp
                            .class(
                                "flex justify-center gap-4 transition-all duration-1000 delay-[1300ms]",
                                visible,
                            )>
                            <a
                                href=MAILTO
                                class="inline-flex items-center gap-2 bg-gradient-to-r from-green-600 to-green-700 text-white px-6 py-3 rounded-lg hover:from-green-700 hover:to-green-800 transition-all duration-300 shadow-lg shadow-green-900/30 hover:shadow-xl hover:shadow-green-900/40 hover:scale-105"
                            >
                                "✉ Contactar"
                            </a>
                            <a
                                href=GITHUB_URL
                                target="_blank"
                                rel=SAFE_LINK_REL
                                class="inline-flex items-center gap-2 border-2 border-green-600 text-green-400 px-6 py-3 rounded-lg hover:bg-green-600 hover:text-white transition-all duration-300 hover:scale-105"
                            >
                                "GitHub"
                            </a>
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <For
                    each=move || particles.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=|(_, particle)| {
                        view! {
                            <div
                                class="absolute w-2 h-2 bg-green-500/20 rounded-full animate-float"
                                style=particle.style()
                            ></div>
                        }
                    }
                />
            </div>
        </section>
    }
}
