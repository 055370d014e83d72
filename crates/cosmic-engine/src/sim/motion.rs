/// Closed-form body motion — pure math, no surface or scheduling deps.
///
/// Angles are functions of wall-clock milliseconds and the simulation's
/// current parameter; nothing integrates or accumulates state, so replaying
/// the same instant always lands a body in the same place.
///
/// Math stays in f64; convert to f32 only at the surface-coordinate step.
use glam::Vec2;
use std::f64::consts::PI;

/// Angle in radians swept by a body at `rate` radians per second.
pub fn body_angle(t_ms: f64, rate: f64) -> f64 {
    t_ms * 0.001 * rate
}

/// Phase offset between adjacent gravity-well test particles.
pub const PARTICLE_PHASE: f64 = PI / 2.5;

/// Gravity demo: particle angle. The per-particle phase is applied before
/// the strength scaling, so a stronger well both spins and spreads the swarm.
pub fn particle_angle(t_ms: f64, strength: f64, index: usize) -> f64 {
    (t_ms * 0.001 + index as f64 * PARTICLE_PHASE) * strength * 0.2
}

/// Gravity demo: particle orbit radius, oscillating around the well.
pub fn particle_radius(t_ms: f64, index: usize) -> f64 {
    60.0 + 20.0 * (t_ms * 0.002 + index as f64).sin()
}

/// Point on the circle of `radius` around `center` at `angle` radians.
pub fn on_circle(center: Vec2, radius: f64, angle: f64) -> Vec2 {
    Vec2::new(
        center.x + (radius * angle.cos()) as f32,
        center.y + (radius * angle.sin()) as f32,
    )
}
