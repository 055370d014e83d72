/// Body tables and palette for the four visualizations.
///
/// Sizes are exaggerated for readability — these are illustrations, not
/// scale models. Colors follow the page palette.
use crate::render::color::Color;
use crate::render::surface::GradientStop;

// ── Orbit demo ───────────────────────────────────────────────────────

pub const STAR_RADIUS: f32 = 20.0;
pub const ORBIT_PLANET_RADIUS: f32 = 10.0;
pub const ORBIT_RADIUS: f64 = 80.0;

pub const STAR_FILL: Color = Color::new(1.0, 1.0, 0.0, 1.0); // #ffff00
pub const STAR_EDGE: Color = Color::new(1.0, 0.922, 0.231, 1.0); // #ffeb3b
pub const PLANET_FILL: Color = Color::new(0.302, 0.475, 1.0, 1.0); // #4d79ff
pub const PLANET_EDGE: Color = Color::new(0.420, 0.549, 1.0, 1.0); // #6b8cff
pub const ORBIT_PATH: Color = Color::new(0.302, 0.475, 1.0, 0.3);

/// Dash pattern shared by every orbit path ring.
pub const PATH_DASH: [f32; 2] = [5.0, 5.0];

// ── Gravity demo ─────────────────────────────────────────────────────

pub const WELL_RADIUS: f32 = 100.0;
pub const PARTICLE_COUNT: usize = 5;
pub const PARTICLE_RADIUS: f32 = 3.0;
pub const PARTICLE_FILL: Color = Color::new(0.659, 0.333, 0.969, 1.0); // #a855f7

/// Well shading: bright core fading to a faint rim.
pub const WELL_STOPS: [GradientStop; 3] = [
    GradientStop::new(0.0, Color::new(0.302, 0.475, 1.0, 0.8)),
    GradientStop::new(0.5, Color::new(0.302, 0.475, 1.0, 0.4)),
    GradientStop::new(1.0, Color::new(0.302, 0.475, 1.0, 0.1)),
];

// ── Solar demo ───────────────────────────────────────────────────────

pub const SUN_BASE_RADIUS: f64 = 25.0;
pub const SUN_FILL: Color = STAR_FILL;

/// Orbit geometry and look of one solar-demo planet.
pub struct PlanetSpec {
    pub orbit_radius: f64,
    pub size: f64,
    /// Angular speed multiplier (radians per second at speed 1).
    pub speed: f64,
    pub color: Color,
}

/// Inner planets, fastest first.
pub const SOLAR_PLANETS: [PlanetSpec; 4] = [
    PlanetSpec {
        orbit_radius: 50.0,
        size: 5.0,
        speed: 2.0,
        color: Color::new(0.549, 0.471, 0.325, 1.0), // Mercury #8c7853
    },
    PlanetSpec {
        orbit_radius: 70.0,
        size: 7.0,
        speed: 1.5,
        color: Color::new(1.0, 0.776, 0.286, 1.0), // Venus #ffc649
    },
    PlanetSpec {
        orbit_radius: 90.0,
        size: 8.0,
        speed: 1.0,
        color: Color::new(0.302, 0.475, 1.0, 1.0), // Earth #4d79ff
    },
    PlanetSpec {
        orbit_radius: 110.0,
        size: 6.0,
        speed: 0.8,
        color: Color::new(0.804, 0.361, 0.361, 1.0), // Mars #cd5c5c
    },
];

// ── Scenario ("two moons") ───────────────────────────────────────────

pub const EARTH_RADIUS: f32 = 30.0;

/// One hypothetical moon of the two-moon Earth.
pub struct MoonSpec {
    pub orbit_radius: f64,
    pub size: f32,
    /// Angular rate in radians per second.
    pub rate: f64,
    /// Phase offset in radians.
    pub phase: f64,
}

pub const MOONS: [MoonSpec; 2] = [
    MoonSpec {
        orbit_radius: 60.0,
        size: 15.0,
        rate: 1.0,
        phase: 0.0,
    },
    MoonSpec {
        orbit_radius: 80.0,
        size: 12.0,
        rate: 0.8,
        phase: std::f64::consts::PI,
    },
];

pub const MOON_FILL: Color = Color::new(0.659, 0.333, 0.969, 1.0); // #a855f7
pub const MOON_EDGE: Color = Color::new(0.753, 0.518, 0.988, 1.0); // #c084fc
pub const MOON_PATH_INNER: Color = Color::new(0.659, 0.333, 0.969, 0.3);
pub const MOON_PATH_OUTER: Color = Color::new(0.659, 0.333, 0.969, 0.2);
