mod controller;
mod tracking;

pub use controller::{chase_camera_system, publish_view_system, ViewUpdated};
