//! Decorative glitter particle placement
//!
//! Particles are re-randomized on every call; there is deliberately no
//! stability guarantee across renders.

use rand::Rng;

/// One glitter particle on the card surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitterParticle {
    /// Horizontal position, percent of card width
    pub x_percent: f32,
    /// Vertical position, percent of card height
    pub y_percent: f32,
    /// Animation phase offset, seconds in [0, 2)
    pub delay_secs: f32,
    /// Animation period, seconds in [1, 2)
    pub duration_secs: f32,
}

/// Number of particles for a given density: one per full 10 points.
pub fn particle_count(density: u8) -> usize {
    (density.min(100) / 10) as usize
}

/// Scatter particles uniformly over the card area.
pub fn scatter<R: Rng + ?Sized>(density: u8, rng: &mut R) -> Vec<GlitterParticle> {
    (0..particle_count(density))
        .map(|_| GlitterParticle {
            x_percent: rng.gen_range(0.0..100.0),
            y_percent: rng.gen_range(0.0..100.0),
            delay_secs: rng.gen_range(0.0..2.0),
            duration_secs: rng.gen_range(1.0..2.0),
        })
        .collect()
}

/// Scatter with the thread-local generator.
pub fn scatter_default(density: u8) -> Vec<GlitterParticle> {
    scatter(density, &mut rand::thread_rng())
}
