pub mod core;
pub mod page;
pub mod render;
pub mod sim;

// Re-export key types at crate root for convenience
pub use crate::core::clock::WallClock;
pub use crate::core::debounce::{Debouncer, DelayTimer, TimerHandle};
pub use crate::core::frame::{run_frame_loop, FrameClock, LoopGate, LoopMode};
pub use crate::core::rng::Rng;
pub use crate::page::ambience::{particle_field, shooting_star, ParticleSpec, ShootingStarSpec};
pub use crate::page::cards::draw_card_art;
pub use crate::page::content::{
    fact_for_day, random_fact, what_if_for_day, NewsItem, WhatIf, MORE_SPACE_NEWS, SPACE_FACTS,
    SPACE_NEWS,
};
pub use crate::page::poll::{KeyValueStore, Poll, PollOption, PollResults, VoteError};
pub use crate::render::color::Color;
pub use crate::render::surface::{GradientStop, Stroke, Surface, SurfaceProvider};
pub use crate::sim::controller::SimController;
pub use crate::sim::draw::{draw_gravity, draw_orbit, draw_scenario, draw_solar};
pub use crate::sim::resize::ResizeAdapter;

#[cfg(test)]
pub(crate) mod test_util;
