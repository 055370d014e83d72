use std::rc::Rc;

use crate::core::debounce::{Debouncer, DelayTimer};

/// Quiet period a resize burst must settle for before redrawing.
pub const RESIZE_QUIET_MS: u32 = 250;

/// Re-renders every registered visualization once after the window settles
/// at a new size. Runs regardless of running flags — a paused canvas must
/// still match the new dimensions. This is the one path where a draw routine
/// runs without going through its controller's loop.
pub struct ResizeAdapter {
    debouncer: Debouncer,
    redraws: Vec<Rc<dyn Fn()>>,
}

impl ResizeAdapter {
    pub fn new(timer: Rc<dyn DelayTimer>) -> Self {
        Self {
            debouncer: Debouncer::new(timer, RESIZE_QUIET_MS),
            redraws: Vec::new(),
        }
    }

    /// Register one redraw thunk — typically a controller's `frame_fn`, plus
    /// the scenario draw.
    pub fn register(&mut self, redraw: Rc<dyn Fn()>) {
        self.redraws.push(redraw);
    }

    /// Host resize event. Debounced; each registered thunk runs exactly once
    /// per settled burst.
    pub fn notify(&self) {
        let redraws = self.redraws.clone();
        self.debouncer.trigger(Box::new(move || {
            for redraw in &redraws {
                redraw();
            }
        }));
    }
}
