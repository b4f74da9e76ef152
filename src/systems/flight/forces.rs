//! Simplified force model, per unit mass.

use nalgebra::Vector3;

use crate::components::aircraft::{AircraftBasis, FlightModelConfig};

/// Thrust along the nose, proportional to the throttle setting.
pub fn thrust(forward: &Vector3<f64>, speed: f64, config: &FlightModelConfig) -> Vector3<f64> {
    forward * config.thrust_gain * speed
}

/// Quadratic drag opposing the velocity; zero when (nearly) at rest.
pub fn drag(velocity: &Vector3<f64>, config: &FlightModelConfig) -> Vector3<f64> {
    let magnitude = velocity.norm();
    if magnitude < config.velocity_epsilon {
        return Vector3::zeros();
    }
    -(velocity / magnitude) * config.drag_gain * magnitude * magnitude
}

pub fn gravity(config: &FlightModelConfig) -> Vector3<f64> {
    Vector3::new(0.0, 0.0, -config.gravity)
}

/// Vertical component of lift, growing with the square of the airspeed
/// along the nose.
pub fn vertical_lift(
    basis: &AircraftBasis,
    velocity: &Vector3<f64>,
    config: &FlightModelConfig,
) -> Vector3<f64> {
    let airspeed = basis.forward.dot(velocity);
    Vector3::new(0.0, 0.0, basis.up.z * config.lift_gain * airspeed * airspeed)
}
