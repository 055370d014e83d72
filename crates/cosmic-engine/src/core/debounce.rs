use std::cell::Cell;
use std::rc::Rc;

/// Opaque handle to a scheduled delay, as issued by the host timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(pub i32);

/// One-shot delayed callback scheduling (setTimeout/clearTimeout shaped).
pub trait DelayTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle;
    fn cancel(&self, handle: TimerHandle);
}

/// Trailing-edge debouncer: the action runs once per burst, after `delay_ms`
/// of quiet.
///
/// Each trigger cancels the pending schedule and starts a fresh one, so a
/// resize storm collapses into a single redraw.
pub struct Debouncer {
    timer: Rc<dyn DelayTimer>,
    delay_ms: u32,
    pending: Rc<Cell<Option<TimerHandle>>>,
}

impl Debouncer {
    pub fn new(timer: Rc<dyn DelayTimer>, delay_ms: u32) -> Self {
        Self {
            timer,
            delay_ms,
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Schedule `action` after the quiet period, superseding any trigger that
    /// has not fired yet.
    pub fn trigger(&self, action: Box<dyn FnOnce()>) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
        let pending = Rc::clone(&self.pending);
        let handle = self.timer.schedule(
            self.delay_ms,
            Box::new(move || {
                pending.set(None);
                action();
            }),
        );
        self.pending.set(Some(handle));
    }

    /// Whether a trigger is waiting out its quiet period.
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}
