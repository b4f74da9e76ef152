pub mod config;
mod controls;
mod model;
mod state;

pub use config::{FlightModelConfig, InitialConditions};
pub use controls::{ControlCommand, ControlDeltas};
pub use model::FlightDynamicsModel;
pub use state::{AircraftBasis, AircraftPose, AircraftSnapshot, AircraftState, ForceBreakdown};
