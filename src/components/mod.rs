pub mod aircraft;
pub mod camera;
mod controller;

pub use aircraft::{
    AircraftBasis, AircraftPose, AircraftSnapshot, AircraftState, ControlCommand, ControlDeltas,
    FlightDynamicsModel, FlightModelConfig, ForceBreakdown, InitialConditions,
};
pub use camera::{CameraMode, ChaseCamera, ChaseCameraConfig};
pub use controller::PlayerController;
