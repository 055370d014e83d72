//! Decorative layer specs — particle field and shooting stars.
//!
//! The DOM glue owns the elements and the CSS animations; the engine only
//! computes deterministic placement numbers and hands them over as JSON.

use serde::Serialize;

use crate::core::rng::Rng;

pub const PARTICLES_DESKTOP: usize = 50;
pub const PARTICLES_MOBILE: usize = 25;

/// CSS placement for one drifting background particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleSpec {
    /// Horizontal offset in percent of the viewport.
    pub left_pct: f32,
    /// Animation delay in seconds.
    pub delay_s: f32,
    /// Animation duration in seconds.
    pub duration_s: f32,
}

/// Generate the particle field. Mobile gets half the particles.
pub fn particle_field(rng: &mut Rng, mobile: bool) -> Vec<ParticleSpec> {
    let count = if mobile {
        PARTICLES_MOBILE
    } else {
        PARTICLES_DESKTOP
    };
    (0..count)
        .map(|_| ParticleSpec {
            left_pct: (rng.next_fraction() * 100.0) as f32,
            delay_s: (rng.next_fraction() * 15.0) as f32,
            duration_s: rng.next_range(15.0, 25.0) as f32,
        })
        .collect()
}

pub fn particle_field_json(seed: u64, mobile: bool) -> String {
    let field = particle_field(&mut Rng::new(seed), mobile);
    serde_json::to_string(&field).unwrap_or_else(|_| "[]".into())
}

/// CSS placement for one shooting star, spawned on an interval by the glue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShootingStarSpec {
    pub left_pct: f32,
    /// Stars spawn in the upper half of the sky.
    pub top_pct: f32,
    pub duration_s: f32,
    pub delay_s: f32,
}

pub fn shooting_star(rng: &mut Rng) -> ShootingStarSpec {
    ShootingStarSpec {
        left_pct: (rng.next_fraction() * 100.0) as f32,
        top_pct: (rng.next_fraction() * 50.0) as f32,
        duration_s: rng.next_range(1.0, 3.0) as f32,
        delay_s: (rng.next_fraction() * 5.0) as f32,
    }
}

pub fn shooting_star_json(seed: u64) -> String {
    let star = shooting_star(&mut Rng::new(seed));
    serde_json::to_string(&star).unwrap_or_else(|_| "{}".into())
}
