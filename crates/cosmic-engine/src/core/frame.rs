use std::cell::Cell;
use std::rc::Rc;

/// Abstraction over "run this callback just before the next repaint".
///
/// No handle is returned: nothing in the engine cancels a pending frame
/// directly. A loop stops by observing a closed [`LoopGate`] inside the
/// callback and declining to re-request.
pub trait FrameClock {
    fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

/// Shared cancellation token for one animation loop.
///
/// Clones share state: a controller holds one end, the running loop holds the
/// other. Closing the gate stops the loop within one frame — the request
/// already in flight still renders, then declines to re-request.
#[derive(Clone)]
pub struct LoopGate(Rc<Cell<bool>>);

impl LoopGate {
    /// Create a closed gate. Simulations load paused.
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(false)))
    }

    pub fn open(&self) {
        self.0.set(true);
    }

    pub fn close(&self) {
        self.0.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.0.get()
    }
}

impl Default for LoopGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Continuation policy for a frame loop.
#[derive(Clone)]
pub enum LoopMode {
    /// Re-request the next frame only while the gate is open.
    Gated(LoopGate),
    /// Re-request unconditionally (decorative always-on animation).
    Continuous,
}

impl LoopMode {
    fn should_continue(&self) -> bool {
        match self {
            LoopMode::Gated(gate) => gate.is_open(),
            LoopMode::Continuous => true,
        }
    }
}

/// Drive `frame` through the clock: invoke it once immediately, then keep
/// re-requesting while `mode` allows.
///
/// The mode is consulted after each invocation, never before, so a gate
/// closed while a request is in flight yields at most one further frame.
/// Calling with a closed gate renders a single static frame and stops.
pub fn run_frame_loop(frames: Rc<dyn FrameClock>, mode: LoopMode, frame: Rc<dyn Fn()>) {
    frame();
    if mode.should_continue() {
        request_next(frames, mode, frame);
    }
}

fn request_next(frames: Rc<dyn FrameClock>, mode: LoopMode, frame: Rc<dyn Fn()>) {
    let clock = Rc::clone(&frames);
    frames.request_frame(Box::new(move || {
        frame();
        if mode.should_continue() {
            request_next(clock, mode, frame);
        }
    }));
}
