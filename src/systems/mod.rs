pub mod camera;
mod controller;
pub mod flight;

pub use camera::{chase_camera_system, publish_view_system, ViewUpdated};
pub use controller::{apply_control_commands, camera_mouse_system, flight_keyboard_system};
pub use flight::{aircraft_snapshot_system, flight_dynamics_system};
