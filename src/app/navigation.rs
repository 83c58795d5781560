use leptos::{prelude::*, web_sys};
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;

use crate::content::OWNER_INITIALS;
use crate::nav::{ActiveSection, MobileMenu, Section, SectionBounds};

fn section_bounds(section: Section) -> Option<SectionBounds> {
    let el = document()
        .get_element_by_id(section.id())?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some(SectionBounds {
        top: el.offset_top() as f64,
        height: el.offset_height() as f64,
    })
}

fn scroll_to(section: Section) {
    match document().get_element_by_id(section.id()) {
        // smooth behaviour comes from `scroll-behavior` in the stylesheet
        Some(el) => el.scroll_into_view(),
        None => log::debug!("no element for section #{}", section.id()),
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let active = RwSignal::new(ActiveSection::new());
    let menu = RwSignal::new(MobileMenu::default());
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        let current = active.get_untracked();
        let mut next = current;
        next.on_scroll(y, section_bounds);
        if next != current {
            active.set(next);
        }
    });

    let go_to = move |section: Section| {
        scroll_to(section);
        menu.update(MobileMenu::close);
    };

    let is_active = move |section: Section| active.with(|a| a.current() == section);

    view! {
        <nav class="fixed top-0 w-full bg-gray-900/90 backdrop-blur-md border-b border-green-800/30 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <span class="text-2xl font-bold bg-gradient-to-r from-green-400 to-green-600 bg-clip-text text-transparent">
                            {OWNER_INITIALS}
                        </span>
                    </div>

                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-4">
                            {Section::ALL
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <button
                                            on:click=move |_| go_to(section)
                                            class=move || {
                                                if is_active(section) {
                                                    "px-3 py-2 rounded-md text-sm font-medium transition-all duration-300 text-green-400 bg-green-900/50 shadow-lg shadow-green-900/20"
                                                } else {
                                                    "px-3 py-2 rounded-md text-sm font-medium transition-all duration-300 text-gray-300 hover:text-green-400 hover:bg-gray-800/50"
                                                }
                                            }
                                        >
                                            {section.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="md:hidden">
                        <button
                            on:click=move |_| menu.update(MobileMenu::toggle)
                            class="inline-flex items-center justify-center p-2 rounded-md text-gray-300 hover:text-green-400 hover:bg-gray-800/50 transition-colors duration-200"
                            aria-label="Menú"
                        >
                            <span class="text-2xl leading-none">
                                {move || if menu.with(MobileMenu::is_open) { "✕" } else { "☰" }}
                            </span>
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu.with(MobileMenu::is_open)>
                <div class="md:hidden">
                    <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3 bg-gray-900/95 border-t border-green-800/30">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        on:click=move |_| go_to(section)
                                        class=move || {
                                            if is_active(section) {
                                                "block px-3 py-2 rounded-md text-base font-medium w-full text-left transition-all duration-300 text-green-400 bg-green-900/50"
                                            } else {
                                                "block px-3 py-2 rounded-md text-base font-medium w-full text-left transition-all duration-300 text-gray-300 hover:text-green-400 hover:bg-gray-800/50"
                                            }
                                        }
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
