use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{schedule, Reveal, SectionTiming, Stagger, StaggeredReveal, VISIBILITY_THRESHOLD};
use crate::timers::Timers;

/// Entrance transition pairs used across the page.
#[derive(Debug, Clone, Copy)]
pub enum Entrance {
    FadeUp,
    FromLeft,
    FromRight,
    Pop,
}

impl Entrance {
    pub fn classes(&self, visible: bool) -> &'static str {
        match (self, visible) {
            (Entrance::FadeUp, true) => "opacity-100 translate-y-0",
            (Entrance::FadeUp, false) => "opacity-0 translate-y-10",
            (Entrance::FromLeft, true) => "opacity-100 translate-x-0",
            (Entrance::FromLeft, false) => "opacity-0 -translate-x-10",
            (Entrance::FromRight, true) => "opacity-100 translate-x-0",
            (Entrance::FromRight, false) => "opacity-0 translate-x-10",
            (Entrance::Pop, true) => "scale-100 rotate-0",
            (Entrance::Pop, false) => "scale-0 rotate-180",
        }
    }

    /// Reactive `class` value: `base` plus the state-dependent half.
    pub fn class(
        self,
        base: &'static str,
        visible: Signal<bool>,
    ) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        move || format!("{base} {}", self.classes(visible.get()))
    }
}

/// Watch `target` and flip to visible the first time it is at least
/// `VISIBILITY_THRESHOLD` in view. `on_reveal` runs once, at that moment.
///
/// The observer is released with the owning component. A target that never
/// mounts never reveals.
pub fn use_reveal<F>(target: NodeRef<html::Section>, on_reveal: F) -> Signal<bool>
where
    F: Fn() + Send + Sync + 'static,
{
    let reveal = RwSignal::new(Reveal::new());

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let ratio = entries
                .iter()
                .map(|entry| entry.intersection_ratio())
                .fold(0.0, f64::max);
            let flipped = reveal
                .try_update_untracked(|r| r.observe(ratio))
                .unwrap_or(false);
            if flipped {
                reveal.notify();
                on_reveal();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![VISIBILITY_THRESHOLD]),
    );

    Signal::derive(move || reveal.with(Reveal::is_visible))
}

#[derive(Debug, Clone, Copy)]
pub struct SectionReveal {
    /// The section itself.
    pub visible: Signal<bool>,
    /// Secondary content (cards, form panel), switched on after the
    /// section's follow-up delay.
    pub children: Signal<bool>,
}

/// Section reveal plus its timed follow-up, per `timing`.
pub fn use_section_reveal(target: NodeRef<html::Section>, timing: SectionTiming) -> SectionReveal {
    let timers = Timers::new();
    let children = RwSignal::new(Reveal::new());

    let visible = use_reveal(target, move || match timing.follow_up {
        Some(delay) => timers.schedule(delay, move || {
            children.update(|c| {
                c.show();
            })
        }),
        None => children.update(|c| {
            c.show();
        }),
    });

    SectionReveal {
        visible,
        children: Signal::derive(move || children.with(Reveal::is_visible)),
    }
}

/// Section reveal whose `count` children each get their own timer, in index
/// order, once the section is visible.
pub fn use_staggered_reveal(
    target: NodeRef<html::Section>,
    stagger: Stagger,
    count: usize,
) -> (Signal<bool>, ReadSignal<StaggeredReveal>) {
    let timers = Timers::new();
    let (items, set_items) = signal(StaggeredReveal::new());

    let visible = use_reveal(target, move || {
        for (index, delay) in schedule(stagger, count) {
            timers.schedule(delay, move || {
                set_items.update(|items| {
                    items.reveal(index);
                })
            });
        }
    });

    (visible, items)
}
