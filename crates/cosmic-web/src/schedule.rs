//! Browser scheduling behind the engine's clock traits:
//! requestAnimationFrame, setTimeout/clearTimeout, and performance.now.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use cosmic_engine::{DelayTimer, FrameClock, TimerHandle, WallClock};

/// requestAnimationFrame-backed frame clock.
///
/// Callbacks are one-shot closures handed to the browser and never
/// cancelled from here; a loop stops itself via its gate.
pub struct RafClock;

impl FrameClock for RafClock {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once_into_js(move || callback());
        if window
            .request_animation_frame(closure.unchecked_ref())
            .is_err()
        {
            log::warn!("requestAnimationFrame rejected a callback; animation loop stalls");
        }
    }
}

/// setTimeout/clearTimeout-backed one-shot timer.
pub struct BrowserTimer;

impl DelayTimer for BrowserTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let Some(window) = web_sys::window() else {
            return TimerHandle(0);
        };
        let closure = Closure::once_into_js(move || callback());
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.unchecked_ref(),
                delay_ms as i32,
            )
            .unwrap_or(0);
        TimerHandle(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle.0);
        }
    }
}

/// performance.now() wall clock: monotonic ms since navigation start.
pub struct PerformanceClock;

impl WallClock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or(0.0)
    }
}
