//! Shared test doubles: manual schedulers, a recording surface, and an
//! in-memory key-value store.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use glam::Vec2;

use crate::core::clock::WallClock;
use crate::core::debounce::{DelayTimer, TimerHandle};
use crate::core::frame::FrameClock;
use crate::page::poll::KeyValueStore;
use crate::render::color::Color;
use crate::render::surface::{GradientStop, Stroke, Surface, SurfaceProvider};

/// Frame clock that queues callbacks until the test fires them.
pub struct ManualFrames {
    queue: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl ManualFrames {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            queue: RefCell::new(Vec::new()),
        })
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Fire the oldest queued frame callback.
    pub fn fire_next(&self) {
        let callback = self.queue.borrow_mut().remove(0);
        callback();
    }
}

impl FrameClock for ManualFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push(callback);
    }
}

/// Adjustable wall clock.
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn at(ms: f64) -> Rc<Self> {
        Rc::new(Self { now: Cell::new(ms) })
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl WallClock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

struct Scheduled {
    handle: TimerHandle,
    due: u64,
    callback: Box<dyn FnOnce()>,
}

/// Delay timer whose clock only advances when the test says so.
pub struct ManualTimer {
    now: Cell<u64>,
    next_id: Cell<i32>,
    queue: RefCell<Vec<Scheduled>>,
}

impl ManualTimer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            now: Cell::new(0),
            next_id: Cell::new(1),
            queue: RefCell::new(Vec::new()),
        })
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Advance the clock, firing due callbacks in schedule order.
    pub fn advance(&self, ms: u64) {
        let now = self.now.get() + ms;
        self.now.set(now);
        loop {
            let due = {
                let mut queue = self.queue.borrow_mut();
                match queue.iter().position(|s| s.due <= now) {
                    Some(idx) => queue.remove(idx),
                    None => break,
                }
            };
            (due.callback)();
        }
    }
}

impl DelayTimer for ManualTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let handle = TimerHandle(id);
        self.queue.borrow_mut().push(Scheduled {
            handle,
            due: self.now.get() + delay_ms as u64,
            callback,
        });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.queue.borrow_mut().retain(|s| s.handle != handle);
    }
}

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        stroke: Stroke,
    },
    RadialGradient {
        center: Vec2,
        radius: f32,
        stops: Vec<GradientStop>,
    },
    LinearGradient {
        from: Color,
        to: Color,
    },
}

/// Recording surface. Clones share one op log, so a provider can hand out a
/// fresh box per frame while the test keeps a view of everything drawn.
#[derive(Clone)]
pub struct Recorder {
    size: (f32, f32),
    ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: (width, height),
            ops: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn ops(&self) -> Vec<DrawOp> {
        self.ops.borrow().clone()
    }

    /// Frames drawn so far (each frame starts with a clear).
    pub fn frames(&self) -> usize {
        self.ops
            .borrow()
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear))
            .count()
    }
}

impl Surface for Recorder {
    fn size(&self) -> (f32, f32) {
        self.size
    }

    fn clear(&mut self) {
        self.ops.borrow_mut().push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ops.borrow_mut().push(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        self.ops.borrow_mut().push(DrawOp::StrokeCircle {
            center,
            radius,
            stroke,
        });
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        self.ops.borrow_mut().push(DrawOp::RadialGradient {
            center,
            radius,
            stops: stops.to_vec(),
        });
    }

    fn fill_linear_gradient(&mut self, from: Color, to: Color) {
        self.ops
            .borrow_mut()
            .push(DrawOp::LinearGradient { from, to });
    }
}

/// Surface provider backed by a map of recorders.
pub struct MapSurfaces {
    surfaces: RefCell<HashMap<String, Recorder>>,
}

impl MapSurfaces {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            surfaces: RefCell::new(HashMap::new()),
        })
    }

    pub fn insert(&self, id: &str, recorder: Recorder) {
        self.surfaces.borrow_mut().insert(id.to_string(), recorder);
    }
}

impl SurfaceProvider for MapSurfaces {
    fn acquire(&self, id: &str) -> Option<Box<dyn Surface>> {
        self.surfaces
            .borrow()
            .get(id)
            .map(|recorder| Box::new(recorder.clone()) as Box<dyn Surface>)
    }
}

/// In-memory key-value store.
pub struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            map: RefCell::new(HashMap::new()),
        })
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
