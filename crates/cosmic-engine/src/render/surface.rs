use glam::Vec2;

use crate::render::color::Color;

/// A gradient color stop at a normalized offset (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Stroke style for outline drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    /// On/off dash lengths in pixels; `None` draws a solid line.
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub const fn solid(width: f32, color: Color) -> Self {
        Self {
            width,
            color,
            dash: None,
        }
    }

    pub const fn dashed(width: f32, color: Color, dash: [f32; 2]) -> Self {
        Self {
            width,
            color,
            dash: Some(dash),
        }
    }
}

/// Abstract 2D drawing target exposing the primitive operations the page
/// needs. The browser canvas context implements this in `cosmic-web`; tests
/// use a recording surface.
pub trait Surface {
    /// Current drawable size (width, height) in CSS pixels.
    fn size(&self) -> (f32, f32);

    /// Erase the whole surface.
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke);

    /// Fill a disc with a radial gradient running center → rim.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);

    /// Wash the whole surface with a top-left → bottom-right linear gradient.
    fn fill_linear_gradient(&mut self, from: Color, to: Color);
}

/// Looks up a drawable surface by element id, fresh for each frame.
///
/// `None` means the element is not mounted (or is not a drawable canvas).
/// Callers treat that as "skip this frame", never as an error.
pub trait SurfaceProvider {
    fn acquire(&self, id: &str) -> Option<Box<dyn Surface>>;
}
