use rand::Rng;

pub const PARTICLE_COUNT: usize = 20;

/// One floating dot in the hero background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            delay: rng.gen_range(0.0..5.0),
            duration: 3.0 + rng.gen_range(0.0..4.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
            self.left, self.top, self.delay, self.duration
        )
    }
}

pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}
