pub mod clock;
pub mod debounce;
pub mod frame;
pub mod rng;
