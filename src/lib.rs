//! Flight dynamics and chase-camera core of a small flight simulator.
//!
//! [`FlightDynamicsModel`](components::FlightDynamicsModel) integrates the
//! aircraft each fixed tick; [`ChaseCamera`](components::ChaseCamera) follows
//! it with a debounced, rate-limited look direction and a cached view
//! transform. Both are plain types usable on their own and bevy components
//! wired together by [`FlightPlugin`](plugins::FlightPlugin).

pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
