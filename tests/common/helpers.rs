use fly::components::{
    AircraftSnapshot, ChaseCamera, ChaseCameraConfig, FlightDynamicsModel, FlightModelConfig,
    InitialConditions,
};
use nalgebra::Vector3;

pub const DT: f64 = 1.0 / 60.0;

/// The aircraft as it starts a session
pub fn create_test_model() -> FlightDynamicsModel {
    FlightDynamicsModel::new(FlightModelConfig::default(), InitialConditions::default())
}

/// Runs `ticks` updates, calling `input` before each one
pub fn fly_for<F>(model: &mut FlightDynamicsModel, ticks: usize, mut input: F)
where
    F: FnMut(&mut FlightDynamicsModel, usize),
{
    for tick in 0..ticks {
        input(model, tick);
        model.update(DT);
    }
}

/// A parked pose looking along `forward`, standing in for an aircraft
pub fn mock_pose(forward: Vector3<f64>) -> AircraftSnapshot {
    AircraftSnapshot::looking_along(Vector3::new(0.0, 0.0, 1.0), forward)
}

/// A chase camera aligned with `forward`
pub fn create_test_camera(forward: Vector3<f64>) -> ChaseCamera {
    ChaseCamera::from_pose(&mock_pose(forward), ChaseCameraConfig::default())
}

/// Angle between two vectors (rad)
pub fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.angle(b)
}
