use leptos::{html, prelude::*};

use crate::content::{ExperienceItem, ExperienceKind, EXPERIENCES};
use crate::nav::Section;
use crate::reveal::TIMELINE_STAGGER;

use super::animate::{use_staggered_reveal, Entrance};

fn kind_icon(kind: ExperienceKind) -> &'static str {
    match kind {
        ExperienceKind::Education => "🎓",
        ExperienceKind::Work | ExperienceKind::Freelance => "💼",
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let (visible, items) = use_staggered_reveal(section_ref, TIMELINE_STAGGER, EXPERIENCES.len());

    view! {
        <section
            node_ref=section_ref
            id=Section::Experience.id()
            class="py-20 bg-gradient-to-br from-gray-900 via-slate-900 to-green-900/20 relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_50%_50%,rgba(34,197,94,0.05),transparent_50%)]"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class=Entrance::FadeUp.class("transition-all duration-1000 ease-out", visible)>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">
                            "Mi " <span class="text-green-400">"Experiencia"</span>
                        </h2>
                        <p class="text-lg text-gray-400 max-w-3xl mx-auto">
                            "Un recorrido por mi trayectoria profesional y académica"
                        </p>
                    </div>

                    <div class="relative">
                        <div class="absolute left-1/2 transform -translate-x-1/2 h-full w-0.5 bg-gradient-to-b from-green-600/50 via-green-500/30 to-transparent hidden md:block"></div>

                        <div class="space-y-16">
                            {EXPERIENCES
                                .iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    let shown = Signal::derive(move || {
                                        items.with(|items| items.is_revealed(index))
                                    });
                                    view! { <TimelineEntry item index shown /> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(item: &'static ExperienceItem, index: usize, shown: Signal<bool>) -> impl IntoView {
    let is_left = ExperienceItem::is_left(index);
    let row = if is_left {
        "relative md:flex items-center md:justify-start transition-all duration-700"
    } else {
        "relative md:flex items-center md:justify-end transition-all duration-700"
    };
    let (card_side, marker_side, align) = if is_left {
        ("md:mr-auto md:text-right", "-right-8", "justify-end")
    } else {
        ("md:ml-auto md:text-left", "-left-8", "justify-start")
    };
    let accent = item.kind.accent();

    view! {
        <div class=Entrance::FadeUp.class(row, shown)>
            <div class=format!(
                "relative bg-gradient-to-br from-gray-800/50 to-gray-900/50 p-6 rounded-2xl border border-green-800/30 backdrop-blur-sm hover:border-green-600/50 hover:shadow-xl hover:shadow-green-900/20 transition-all duration-300 hover:scale-[1.02] w-full md:w-[45%] {card_side}",
            )>
                <div class=format!("absolute top-6 {marker_side} flex items-center justify-center")>
                    <div class=format!(
                        "w-10 h-10 bg-gradient-to-br {accent} rounded-full flex items-center justify-center text-white border-4 border-gray-900 shadow-lg",
                    )>{kind_icon(item.kind)}</div>
                </div>

                <div class="mb-2 flex items-center justify-between">
                    <span class=format!(
                        "px-3 py-1 bg-gradient-to-r {accent} text-white text-xs font-medium rounded-full",
                    )>{item.kind.label()}</span>
                    <span class="flex items-center gap-1 text-gray-400 text-sm">
                        "📅 " {item.period}
                    </span>
                </div>

                <h3 class="text-xl font-bold text-white mb-1">{item.title}</h3>
                <p class="text-green-400 font-medium mb-2">{item.organization}</p>
                <div class=format!("flex items-center gap-2 text-sm text-gray-400 {align} mb-3")>
                    "📍 " {item.location}
                </div>
                <p class="text-gray-300 mb-4">{item.description}</p>
                <ul class=format!(
                    "space-y-2 text-sm text-gray-400 {} mb-4",
                    if is_left { "text-right" } else { "text-left" },
                )>
                    {item
                        .achievements
                        .iter()
                        .map(|achievement| {
                            if is_left {
                                view! {
                                    <li class="flex items-start gap-2 justify-end">
                                        <span>{*achievement}</span>
                                        <span class="text-green-400 mt-1">"•"</span>
                                    </li>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <li class="flex items-start gap-2">
                                        <span class="text-green-400 mt-1">"•"</span>
                                        <span>{*achievement}</span>
                                    </li>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()}
                </ul>
                {item
                    .technologies
                    .map(|technologies| {
                        view! {
                            <div class=format!("flex flex-wrap gap-2 {align}")>
                                {technologies
                                    .iter()
                                    .map(|tech| {
                                        view! {
                                            <span class="px-2 py-1 bg-green-900/30 text-green-400 text-xs rounded-full border border-green-800/50">
                                                {*tech}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}
