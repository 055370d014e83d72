use std::cell::Cell;
use std::rc::Rc;

use crate::core::clock::WallClock;
use crate::core::frame::{run_frame_loop, FrameClock, LoopGate, LoopMode};
use crate::render::surface::{Surface, SurfaceProvider};
use crate::sim::draw;

/// A per-frame draw routine as bound by a controller.
pub type DrawFn = fn(&mut dyn Surface, f64, f64);

/// Parameter defaults, restored on page load and on reset.
pub const DEFAULT_ORBIT_SPEED: f64 = 1.0;
pub const DEFAULT_GRAVITY_STRENGTH: f64 = 5.0;
pub const DEFAULT_SOLAR_ZOOM: f64 = 1.0;

/// Owns one simulation's running flag and tunable parameter, and drives its
/// draw routine through the frame clock.
///
/// The running flag is a [`LoopGate`]: `pause` closes it and the loop stops
/// after the frame already in flight. The parameter is read once per rendered
/// frame; setting it never redraws by itself.
pub struct SimController {
    provider: Rc<dyn SurfaceProvider>,
    canvas_id: String,
    clock: Rc<dyn WallClock>,
    frames: Rc<dyn FrameClock>,
    draw: DrawFn,
    gate: LoopGate,
    param: Rc<Cell<f64>>,
    default_param: f64,
    /// Truncate incoming values toward zero (gravity strength is integral).
    integral: bool,
}

fn draw_now(
    provider: &dyn SurfaceProvider,
    id: &str,
    draw: DrawFn,
    clock: &dyn WallClock,
    param: f64,
) {
    // An unmounted canvas skips the frame; the loop itself keeps running.
    if let Some(mut surface) = provider.acquire(id) {
        draw(surface.as_mut(), clock.now_ms(), param);
    }
}

impl SimController {
    fn new(
        provider: Rc<dyn SurfaceProvider>,
        canvas_id: String,
        clock: Rc<dyn WallClock>,
        frames: Rc<dyn FrameClock>,
        draw: DrawFn,
        default_param: f64,
        integral: bool,
    ) -> Self {
        Self {
            provider,
            canvas_id,
            clock,
            frames,
            draw,
            gate: LoopGate::new(),
            param: Rc::new(Cell::new(default_param)),
            default_param,
            integral,
        }
    }

    /// Orbit demo: parameter is the planet's angular speed.
    pub fn orbit(
        provider: Rc<dyn SurfaceProvider>,
        clock: Rc<dyn WallClock>,
        frames: Rc<dyn FrameClock>,
        canvas_id: impl Into<String>,
    ) -> Self {
        Self::new(
            provider,
            canvas_id.into(),
            clock,
            frames,
            draw::draw_orbit,
            DEFAULT_ORBIT_SPEED,
            false,
        )
    }

    /// Gravity demo: parameter is the integral well strength.
    pub fn gravity(
        provider: Rc<dyn SurfaceProvider>,
        clock: Rc<dyn WallClock>,
        frames: Rc<dyn FrameClock>,
        canvas_id: impl Into<String>,
    ) -> Self {
        Self::new(
            provider,
            canvas_id.into(),
            clock,
            frames,
            draw::draw_gravity,
            DEFAULT_GRAVITY_STRENGTH,
            true,
        )
    }

    /// Solar demo: parameter is the zoom factor.
    pub fn solar(
        provider: Rc<dyn SurfaceProvider>,
        clock: Rc<dyn WallClock>,
        frames: Rc<dyn FrameClock>,
        canvas_id: impl Into<String>,
    ) -> Self {
        Self::new(
            provider,
            canvas_id.into(),
            clock,
            frames,
            draw::draw_solar,
            DEFAULT_SOLAR_ZOOM,
            false,
        )
    }

    /// Open the gate and enter the frame loop: one frame renders immediately,
    /// then the loop self-sustains. Starting a running simulation is a no-op
    /// so loops never stack.
    pub fn start(&self) {
        if self.gate.is_open() {
            return;
        }
        self.gate.open();
        run_frame_loop(
            Rc::clone(&self.frames),
            LoopMode::Gated(self.gate.clone()),
            self.frame_fn(),
        );
    }

    /// Close the gate. At most the frame already in flight still renders.
    pub fn pause(&self) {
        self.gate.close();
    }

    /// Stop the loop, restore the default parameter, and render exactly one
    /// static frame at the current time.
    pub fn reset(&self) {
        self.gate.close();
        self.param.set(self.default_param);
        self.render_once();
    }

    /// Store a new parameter value. It takes effect on the next rendered
    /// frame. The value is kept verbatim (NaN included — a broken slider
    /// yields a broken frame, not an error), except that integral parameters
    /// are truncated toward zero.
    pub fn set_param(&self, value: f64) {
        let value = if self.integral { value.trunc() } else { value };
        self.param.set(value);
    }

    pub fn param(&self) -> f64 {
        self.param.get()
    }

    pub fn is_running(&self) -> bool {
        self.gate.is_open()
    }

    /// One unconditional draw at the current time and parameter, used by
    /// reset and the resize adapter.
    pub fn render_once(&self) {
        draw_now(
            self.provider.as_ref(),
            &self.canvas_id,
            self.draw,
            self.clock.as_ref(),
            self.param.get(),
        );
    }

    /// The frame thunk handed to the loop. It shares this controller's
    /// parameter cell, so updates land on the next frame without replumbing.
    pub fn frame_fn(&self) -> Rc<dyn Fn()> {
        let provider = Rc::clone(&self.provider);
        let clock = Rc::clone(&self.clock);
        let id = self.canvas_id.clone();
        let draw = self.draw;
        let param = Rc::clone(&self.param);
        Rc::new(move || draw_now(provider.as_ref(), &id, draw, clock.as_ref(), param.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{DrawOp, ManualClock, ManualFrames, MapSurfaces, Recorder};
    use glam::Vec2;

    fn rig(id: &str) -> (Rc<MapSurfaces>, Recorder, Rc<ManualClock>, Rc<ManualFrames>) {
        let surfaces = MapSurfaces::new();
        let recorder = Recorder::new(400.0, 300.0);
        surfaces.insert(id, recorder.clone());
        (surfaces, recorder, ManualClock::at(0.0), ManualFrames::new())
    }

    #[test]
    fn start_renders_immediately_and_self_sustains() {
        let (surfaces, recorder, clock, frames) = rig("orbit-canvas");
        let sim = SimController::orbit(surfaces, clock, frames.clone(), "orbit-canvas");

        sim.start();
        assert!(sim.is_running());
        assert_eq!(recorder.frames(), 1);
        assert_eq!(frames.pending(), 1);

        frames.fire_next();
        assert_eq!(recorder.frames(), 2);
        assert_eq!(frames.pending(), 1);
    }

    #[test]
    fn pause_is_observable_before_the_extra_frame() {
        let (surfaces, recorder, clock, frames) = rig("orbit-canvas");
        let sim = SimController::orbit(surfaces, clock, frames.clone(), "orbit-canvas");

        sim.start();
        sim.pause();
        // The flag flips immediately; only the already-scheduled frame is
        // still owed.
        assert!(!sim.is_running());
        assert_eq!(frames.pending(), 1);

        frames.fire_next();
        assert_eq!(recorder.frames(), 2);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn start_twice_does_not_stack_loops() {
        let (surfaces, recorder, clock, frames) = rig("orbit-canvas");
        let sim = SimController::orbit(surfaces, clock, frames.clone(), "orbit-canvas");

        sim.start();
        sim.start();
        assert_eq!(recorder.frames(), 1);
        assert_eq!(frames.pending(), 1);
        frames.fire_next();
        assert_eq!(frames.pending(), 1);
    }

    #[test]
    fn reset_stops_restores_default_and_renders_once() {
        let (surfaces, recorder, clock, frames) = rig("solar-canvas");
        let sim = SimController::solar(surfaces, clock, frames.clone(), "solar-canvas");

        sim.set_param(2.5);
        sim.start();
        frames.fire_next();
        let before = recorder.frames();

        sim.reset();
        assert!(!sim.is_running());
        assert_eq!(sim.param(), DEFAULT_SOLAR_ZOOM);
        assert_eq!(recorder.frames(), before + 1);

        // Nothing left but the one in-flight frame from the old loop.
        frames.fire_next();
        assert_eq!(frames.pending(), 0);
        assert_eq!(recorder.frames(), before + 2);
    }

    #[test]
    fn set_param_does_not_redraw_but_lands_next_frame() {
        let (surfaces, recorder, clock, frames) = rig("solar-canvas");
        let sim = SimController::solar(surfaces, clock, frames.clone(), "solar-canvas");

        sim.start();
        let frames_drawn = recorder.frames();
        sim.set_param(2.0);
        assert_eq!(recorder.frames(), frames_drawn);

        frames.fire_next();
        // Last frame's sun radius reflects the new zoom.
        let sun_radius = recorder
            .ops()
            .into_iter()
            .rev()
            .find_map(|op| match op {
                DrawOp::FillCircle { radius, .. } => Some(radius),
                _ => None,
            })
            .unwrap();
        assert!(sun_radius > 10.0); // any planet or sun radius at zoom 2 beats zoom-1 planets
    }

    #[test]
    fn gravity_strength_is_truncated_to_an_integer() {
        let (surfaces, _recorder, clock, frames) = rig("gravity-canvas");
        let sim = SimController::gravity(surfaces, clock, frames, "gravity-canvas");

        sim.set_param(7.9);
        assert_eq!(sim.param(), 7.0);
        sim.set_param(-2.5);
        assert_eq!(sim.param(), -2.0);
    }

    #[test]
    fn nan_parameter_flows_through_without_panicking() {
        let (surfaces, recorder, clock, frames) = rig("orbit-canvas");
        let sim = SimController::orbit(surfaces, clock, frames, "orbit-canvas");

        sim.set_param(f64::NAN);
        assert!(sim.param().is_nan());
        sim.render_once();
        assert_eq!(recorder.frames(), 1);
    }

    #[test]
    fn missing_surface_skips_frames_silently() {
        let surfaces = MapSurfaces::new();
        let clock = ManualClock::at(0.0);
        let frames = ManualFrames::new();
        let sim = SimController::orbit(surfaces, clock, frames.clone(), "orbit-canvas");

        sim.start();
        frames.fire_next();
        // No surface, no frames, no panic — and the loop stays alive for
        // when the canvas mounts.
        assert!(sim.is_running());
        assert_eq!(frames.pending(), 1);
    }

    #[test]
    fn gravity_end_to_end_particle_position() {
        let (surfaces, recorder, clock, frames) = rig("gravity-canvas");
        clock.set(1000.0);
        let sim = SimController::gravity(surfaces, clock, frames, "gravity-canvas");

        sim.set_param(5.0);
        sim.start();

        let particles: Vec<(Vec2, f32)> = recorder
            .ops()
            .into_iter()
            .filter_map(|op| match op {
                DrawOp::FillCircle { center, radius, .. } => Some((center, radius)),
                _ => None,
            })
            .collect();
        assert_eq!(particles.len(), 5);

        let r = 60.0 + 20.0 * (2.0f64).sin();
        let expected = Vec2::new(
            200.0 + (r * 1.0f64.cos()) as f32,
            150.0 + (r * 1.0f64.sin()) as f32,
        );
        assert!(
            (particles[0].0 - expected).length() < 1e-3,
            "particle 0 at {}",
            particles[0].0
        );
    }
}
