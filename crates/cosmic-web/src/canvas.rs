//! Canvas 2D implementation of the engine's drawing surface.

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use cosmic_engine::{Color, GradientStop, Stroke, Surface, SurfaceProvider};

/// A mounted canvas element's 2D context, sized at acquisition.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }

    /// Begin a circular path. A malformed radius (negative, NaN) makes the
    /// arc call throw; the shape is skipped and the frame carries on.
    fn trace_circle(&self, center: Vec2, radius: f32) -> bool {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if self.trace_circle(center, radius) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        if !self.trace_circle(center, radius) {
            return;
        }
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.width as f64);
        let dash = match stroke.dash {
            Some([on, off]) => js_sys::Array::of2(
                &JsValue::from_f64(on as f64),
                &JsValue::from_f64(off as f64),
            ),
            None => js_sys::Array::new(),
        };
        let _ = self.ctx.set_line_dash(&dash);
        self.ctx.stroke();
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        for stop in stops {
            if gradient
                .add_color_stop(stop.offset, &stop.color.to_css())
                .is_err()
            {
                return;
            }
        }
        if self.trace_circle(center, radius) {
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill();
        }
    }

    fn fill_linear_gradient(&mut self, from: Color, to: Color) {
        let (w, h) = (self.width as f64, self.height as f64);
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, w, h);
        if gradient.add_color_stop(0.0, &from.to_css()).is_err() {
            return;
        }
        if gradient.add_color_stop(1.0, &to.to_css()).is_err() {
            return;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }
}

/// Looks elements up by id in the live document, fresh for every frame.
///
/// A missing element, a non-canvas element, or a context failure all come
/// back `None`; the engine treats that as "skip this frame".
pub struct DocumentSurfaces;

impl SurfaceProvider for DocumentSurfaces {
    fn acquire(&self, id: &str) -> Option<Box<dyn Surface>> {
        let canvas = web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let surface = CanvasSurface::from_canvas(&canvas)?;
        Some(Box::new(surface))
    }
}
