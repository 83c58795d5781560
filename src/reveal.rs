use std::collections::BTreeSet;
use std::time::Duration;

/// Intersection ratio a section must reach before it is revealed.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// The hero banner ignores the viewport and fades in this long after mount.
pub const HERO_DELAY: Duration = Duration::from_millis(200);

/// One-way visibility flag for a section's entrance animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    visible: bool,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed an intersection report. Returns `true` only on the report that
    /// flips the section to visible; every later report is ignored.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.visible || ratio < VISIBILITY_THRESHOLD {
            return false;
        }
        self.visible = true;
        true
    }

    /// Unconditional reveal (timer driven sections).
    pub fn show(&mut self) -> bool {
        let flipped = !self.visible;
        self.visible = true;
        flipped
    }
}

/// Delay applied to the n-th child of an already visible section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stagger {
    /// `index * step`
    Uniform { step: Duration },
    /// `index * step + base`
    Offset { step: Duration, base: Duration },
}

impl Stagger {
    pub const fn uniform(step_ms: u64) -> Self {
        Stagger::Uniform {
            step: Duration::from_millis(step_ms),
        }
    }

    pub const fn offset(step_ms: u64, base_ms: u64) -> Self {
        Stagger::Offset {
            step: Duration::from_millis(step_ms),
            base: Duration::from_millis(base_ms),
        }
    }

    pub fn delay(&self, index: usize) -> Duration {
        let index = index as u32;
        match *self {
            Stagger::Uniform { step } => step * index,
            Stagger::Offset { step, base } => step * index + base,
        }
    }

    /// CSS `transition-delay` declaration for the n-th child.
    pub fn css(&self, index: usize) -> String {
        format!("transition-delay: {}ms", self.delay(index).as_millis())
    }
}

/// How a section sequences its children once it becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTiming {
    /// Wait before the secondary reveal (cards, form panel) switches on.
    pub follow_up: Option<Duration>,
    /// Per-child delay, either as CSS transition delays or as timers.
    pub stagger: Option<Stagger>,
}

impl SectionTiming {
    const fn new(follow_up_ms: Option<u64>, stagger: Option<Stagger>) -> Self {
        let follow_up = match follow_up_ms {
            Some(ms) => Some(Duration::from_millis(ms)),
            None => None,
        };
        Self { follow_up, stagger }
    }
}

/// Timeline entries get one timer each.
pub const TIMELINE_STAGGER: Stagger = Stagger::uniform(200);

pub const ABOUT_TIMING: SectionTiming = SectionTiming::new(Some(500), Some(Stagger::offset(100, 700)));
pub const EXPERIENCE_TIMING: SectionTiming = SectionTiming::new(None, Some(TIMELINE_STAGGER));
pub const PROJECTS_TIMING: SectionTiming = SectionTiming::new(Some(300), Some(Stagger::uniform(150)));
pub const TECHNOLOGIES_TIMING: SectionTiming =
    SectionTiming::new(Some(500), Some(Stagger::uniform(200)));
pub const CONTACT_TIMING: SectionTiming = SectionTiming::new(Some(300), None);

/// Ordered set of child indices already revealed. Grows only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaggeredReveal {
    revealed: BTreeSet<usize>,
}

impl StaggeredReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reveal(&mut self, index: usize) -> bool {
        self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed.iter().copied()
    }
}

/// Timer plan for revealing `count` children: `(index, delay)` in firing
/// order.
pub fn schedule(stagger: Stagger, count: usize) -> Vec<(usize, Duration)> {
    (0..count).map(|i| (i, stagger.delay(i))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reveal_threshold() {
        let mut reveal = Reveal::new();
        assert!(!reveal.observe(0.0));
        assert!(!reveal.observe(0.09));
        assert!(!reveal.is_visible());
        assert!(reveal.observe(0.1));
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut reveal = Reveal::new();
        assert!(reveal.observe(0.5));
        assert!(!reveal.observe(0.8));
        assert!(!reveal.show());
    }

    #[test]
    fn test_show_flips_hidden_section() {
        let mut reveal = Reveal::new();
        assert!(reveal.show());
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_stagger_delays() {
        let about = ABOUT_TIMING.stagger.expect("about cards are staggered");
        assert_eq!(about.delay(0), Duration::from_millis(700));
        assert_eq!(about.delay(3), Duration::from_millis(1000));
        assert_eq!(about.css(2), "transition-delay: 900ms");

        let experience = EXPERIENCE_TIMING.stagger.expect("timeline is staggered");
        assert_eq!(experience.delay(0), Duration::ZERO);
        assert_eq!(experience.delay(2), Duration::from_millis(400));
    }

    #[test]
    fn test_section_follow_ups() {
        assert_eq!(ABOUT_TIMING.follow_up, Some(Duration::from_millis(500)));
        assert_eq!(PROJECTS_TIMING.follow_up, Some(Duration::from_millis(300)));
        assert_eq!(TECHNOLOGIES_TIMING.follow_up, Some(Duration::from_millis(500)));
        assert_eq!(CONTACT_TIMING.follow_up, Some(Duration::from_millis(300)));
        assert_eq!(EXPERIENCE_TIMING.follow_up, None);
        assert_eq!(CONTACT_TIMING.stagger, None);
    }

    #[test]
    fn test_staggered_reveal_is_a_set() {
        let mut items = StaggeredReveal::new();
        assert!(items.is_empty());
        assert!(items.reveal(1));
        assert!(items.reveal(0));
        assert!(!items.reveal(1));
        assert_eq!(items.iter().collect::<Vec<_>>(), vec![0, 1]);
        assert!(items.is_revealed(0));
        assert!(!items.is_revealed(2));
    }

    #[test]
    fn test_schedule_keeps_index_order() {
        let plan = schedule(Stagger::uniform(200), 3);
        assert_eq!(
            plan,
            vec![
                (0, Duration::ZERO),
                (1, Duration::from_millis(200)),
                (2, Duration::from_millis(400)),
            ]
        );
    }

    proptest! {
        #[test]
        fn reveal_never_reverts(ratios in proptest::collection::vec(0.0f64..=1.0, 0..50)) {
            let mut reveal = Reveal::new();
            let mut seen_visible = false;
            let mut flips = 0;
            for ratio in ratios {
                if reveal.observe(ratio) {
                    flips += 1;
                }
                if seen_visible {
                    prop_assert!(reveal.is_visible());
                }
                seen_visible = reveal.is_visible();
            }
            prop_assert!(flips <= 1);
        }

        #[test]
        fn stagger_is_monotonic(step in 0u64..1000, base in 0u64..1000, count in 1usize..20) {
            let plan = schedule(Stagger::offset(step, base), count);
            prop_assert!(plan.windows(2).all(|w| w[0].1 <= w[1].1));
        }
    }
}
