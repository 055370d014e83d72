//! Placeholder art for news cards — a gradient wash with a scatter of
//! translucent discs, seeded by card index so re-renders are identical.

use glam::Vec2;

use crate::core::rng::Rng;
use crate::render::color::Color;
use crate::render::surface::Surface;

/// Gradient palette cycled by card index.
pub const CARD_COLORS: [Color; 5] = [
    Color::new(0.302, 0.475, 1.0, 1.0),   // #4d79ff
    Color::new(0.659, 0.333, 0.969, 1.0), // #a855f7
    Color::new(0.0, 0.831, 1.0, 1.0),     // #00d4ff
    Color::new(1.0, 0.420, 0.420, 1.0),   // #ff6b6b
    Color::new(0.306, 0.804, 0.769, 1.0), // #4ecdc4
];

const SCATTER_COUNT: usize = 5;
const SCATTER_ALPHA: f32 = 0.1;

/// Draw one card's art onto `surface`.
pub fn draw_card_art(surface: &mut dyn Surface, index: usize) {
    let from = CARD_COLORS[index % CARD_COLORS.len()];
    let to = CARD_COLORS[(index + 1) % CARD_COLORS.len()];
    surface.fill_linear_gradient(from, to);

    let (w, h) = surface.size();
    let mut rng = Rng::new(index as u64 * 31 + 7);
    for _ in 0..SCATTER_COUNT {
        let center = Vec2::new(
            (rng.next_fraction() * w as f64) as f32,
            (rng.next_fraction() * h as f64) as f32,
        );
        let radius = rng.next_range(10.0, 60.0) as f32;
        surface.fill_circle(center, radius, Color::WHITE.with_alpha(SCATTER_ALPHA));
    }
}
