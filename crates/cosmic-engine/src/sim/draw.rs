/// Per-frame draw routines — pure functions of (surface, time, parameter).
///
/// Each routine clears the surface and redraws every body for the frame.
/// Scheduling and running flags live in the frame loop, not here, which is
/// what keeps these replayable: identical (time, parameter, surface size)
/// always produces the identical operation sequence.
use glam::Vec2;

use crate::render::surface::{Stroke, Surface};
use crate::sim::bodies;
use crate::sim::motion;

fn center_of(surface: &dyn Surface) -> Vec2 {
    let (w, h) = surface.size();
    Vec2::new(w / 2.0, h / 2.0)
}

/// One fixed star, one planet on a dashed 80 px orbit. `speed` is the
/// planet's angular rate.
pub fn draw_orbit(surface: &mut dyn Surface, t_ms: f64, speed: f64) {
    let center = center_of(surface);
    surface.clear();

    surface.fill_circle(center, bodies::STAR_RADIUS, bodies::STAR_FILL);
    surface.stroke_circle(center, bodies::STAR_RADIUS, Stroke::solid(1.0, bodies::STAR_EDGE));

    let planet = motion::on_circle(center, bodies::ORBIT_RADIUS, motion::body_angle(t_ms, speed));
    surface.fill_circle(planet, bodies::ORBIT_PLANET_RADIUS, bodies::PLANET_FILL);
    surface.stroke_circle(
        planet,
        bodies::ORBIT_PLANET_RADIUS,
        Stroke::solid(1.0, bodies::PLANET_EDGE),
    );

    surface.stroke_circle(
        center,
        bodies::ORBIT_RADIUS as f32,
        Stroke::dashed(1.0, bodies::ORBIT_PATH, bodies::PATH_DASH),
    );
}

/// Radial gravity well with five orbiting test particles. `strength` scales
/// how fast the swarm circulates.
pub fn draw_gravity(surface: &mut dyn Surface, t_ms: f64, strength: f64) {
    let center = center_of(surface);
    surface.clear();

    surface.fill_radial_gradient(center, bodies::WELL_RADIUS, &bodies::WELL_STOPS);

    for i in 0..bodies::PARTICLE_COUNT {
        let angle = motion::particle_angle(t_ms, strength, i);
        let radius = motion::particle_radius(t_ms, i);
        let pos = motion::on_circle(center, radius, angle);
        surface.fill_circle(pos, bodies::PARTICLE_RADIUS, bodies::PARTICLE_FILL);
    }
}

/// Sun and four inner planets, every radius scaled by `zoom`.
pub fn draw_solar(surface: &mut dyn Surface, t_ms: f64, zoom: f64) {
    let center = center_of(surface);
    surface.clear();

    surface.fill_circle(center, (bodies::SUN_BASE_RADIUS * zoom) as f32, bodies::SUN_FILL);

    for planet in &bodies::SOLAR_PLANETS {
        let pos = motion::on_circle(
            center,
            planet.orbit_radius * zoom,
            motion::body_angle(t_ms, planet.speed),
        );
        surface.fill_circle(pos, (planet.size * zoom) as f32, planet.color);
    }
}

/// Daily "two moons" visualization: Earth at center, two moons on
/// independent orbits. Ignores its parameter; the scenario has no controls
/// and animates continuously.
pub fn draw_scenario(surface: &mut dyn Surface, t_ms: f64, _param: f64) {
    let center = center_of(surface);
    surface.clear();

    surface.fill_circle(center, bodies::EARTH_RADIUS, bodies::PLANET_FILL);
    surface.stroke_circle(center, bodies::EARTH_RADIUS, Stroke::solid(2.0, bodies::PLANET_EDGE));

    for moon in &bodies::MOONS {
        let angle = motion::body_angle(t_ms, moon.rate) + moon.phase;
        let pos = motion::on_circle(center, moon.orbit_radius, angle);
        surface.fill_circle(pos, moon.size, bodies::MOON_FILL);
        surface.stroke_circle(pos, moon.size, Stroke::solid(1.0, bodies::MOON_EDGE));
    }

    surface.stroke_circle(
        center,
        bodies::MOONS[0].orbit_radius as f32,
        Stroke::dashed(1.0, bodies::MOON_PATH_INNER, bodies::PATH_DASH),
    );
    surface.stroke_circle(
        center,
        bodies::MOONS[1].orbit_radius as f32,
        Stroke::solid(1.0, bodies::MOON_PATH_OUTER),
    );
}
