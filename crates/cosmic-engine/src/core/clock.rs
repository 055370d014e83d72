/// Monotonic wall-clock source in milliseconds from an arbitrary epoch.
///
/// Every drawn position is a pure function of this time and the current
/// parameter, so the clock is injected rather than read ambiently — tests
/// replay exact instants, the browser supplies `performance.now()`.
pub trait WallClock {
    fn now_ms(&self) -> f64;
}
