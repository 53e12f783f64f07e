use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One floating particle in the hero background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpec {
    /// Diameter, 2 to 10 px
    pub size_px: f64,
    /// Rise time, 10 to 30 s
    pub duration_s: f64,
    /// Start delay, 0 to 10 s
    pub delay_s: f64,
    /// Horizontal start position, 0 to 100 %
    pub start_x_pct: f64,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(2.0..10.0),
            duration_s: rng.gen_range(10.0..30.0),
            delay_s: rng.gen_range(0.0..10.0),
            start_x_pct: rng.gen_range(0.0..100.0),
        }
    }

    /// Inline style for the particle element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width:{size:.2}px;height:{size:.2}px;left:{x:.2}%;\
             animation:particleFloat {dur:.2}s linear {delay:.2}s infinite;\
             box-shadow:0 0 {glow:.2}px rgba(229,168,48,0.5);",
            size = self.size_px,
            x = self.start_x_pct,
            dur = self.duration_s,
            delay = self.delay_s,
            glow = self.size_px * 2.0,
        )
    }
}

/// Generate `count` particles from a seed so a given seed always yields the
/// same field.
#[must_use]
pub fn particle_field(count: usize, seed: u64) -> Vec<ParticleSpec> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| ParticleSpec::random(&mut rng)).collect()
}
