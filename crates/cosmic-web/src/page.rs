//! The page wiring: one controller per interactive canvas, the continuous
//! scenario loop, the debounced resize fan-out, and the poll.

use std::rc::Rc;

use cosmic_engine::page::content;
use cosmic_engine::{
    draw_scenario, run_frame_loop, FrameClock, LoopMode, Poll, Rng, ResizeAdapter, SimController,
    SurfaceProvider, WallClock,
};

use crate::canvas::DocumentSurfaces;
use crate::schedule::{BrowserTimer, PerformanceClock, RafClock};
use crate::storage::{LocalStore, SessionStore};

pub const ORBIT_CANVAS: &str = "orbit-canvas";
pub const GRAVITY_CANVAS: &str = "gravity-canvas";
pub const SOLAR_CANVAS: &str = "solar-canvas";
pub const SCENARIO_CANVAS: &str = "scenario-canvas";

pub struct Page {
    orbit: SimController,
    gravity: SimController,
    solar: SimController,
    poll: Poll,
    resize: ResizeAdapter,
    rng: Rng,
}

impl Page {
    /// Bind the engine to the browser. The three interactive canvases get a
    /// single static frame and load paused; only the scenario loop starts
    /// animating immediately.
    pub fn new() -> Self {
        let provider: Rc<dyn SurfaceProvider> = Rc::new(DocumentSurfaces);
        let clock: Rc<dyn WallClock> = Rc::new(PerformanceClock);
        let frames: Rc<dyn FrameClock> = Rc::new(RafClock);
        let timer = Rc::new(BrowserTimer);

        let orbit = SimController::orbit(
            Rc::clone(&provider),
            Rc::clone(&clock),
            Rc::clone(&frames),
            ORBIT_CANVAS,
        );
        let gravity = SimController::gravity(
            Rc::clone(&provider),
            Rc::clone(&clock),
            Rc::clone(&frames),
            GRAVITY_CANVAS,
        );
        let solar = SimController::solar(
            Rc::clone(&provider),
            Rc::clone(&clock),
            Rc::clone(&frames),
            SOLAR_CANVAS,
        );

        let scenario_frame = scenario_frame_fn(Rc::clone(&provider), Rc::clone(&clock));

        let mut resize = ResizeAdapter::new(timer);
        resize.register(orbit.frame_fn());
        resize.register(gravity.frame_fn());
        resize.register(solar.frame_fn());
        resize.register(Rc::clone(&scenario_frame));

        orbit.render_once();
        gravity.render_once();
        solar.render_once();

        run_frame_loop(frames, LoopMode::Continuous, scenario_frame);

        Self {
            orbit,
            gravity,
            solar,
            poll: Poll::load(Rc::new(LocalStore), Rc::new(SessionStore)),
            resize,
            rng: Rng::new(js_sys::Date::now() as u64),
        }
    }

    pub fn orbit(&self) -> &SimController {
        &self.orbit
    }

    pub fn gravity(&self) -> &SimController {
        &self.gravity
    }

    pub fn solar(&self) -> &SimController {
        &self.solar
    }

    pub fn poll(&self) -> &Poll {
        &self.poll
    }

    pub fn poll_mut(&mut self) -> &mut Poll {
        &mut self.poll
    }

    pub fn notify_resize(&self) {
        self.resize.notify();
    }

    pub fn random_fact(&mut self) -> &'static str {
        content::random_fact(&mut self.rng)
    }

    /// Fresh seed for the decorative generators, drawn from the page rng so
    /// each layer gets its own deterministic stream.
    pub fn seed(&mut self) -> u64 {
        self.rng.next_int(u32::MAX) as u64
    }
}

fn scenario_frame_fn(provider: Rc<dyn SurfaceProvider>, clock: Rc<dyn WallClock>) -> Rc<dyn Fn()> {
    Rc::new(move || {
        if let Some(mut surface) = provider.acquire(SCENARIO_CANVAS) {
            draw_scenario(surface.as_mut(), clock.now_ms(), 0.0);
        }
    })
}
