//! Empirical control laws of the flight model.
//!
//! None of these are physically derived. Rates are in rad/s and are turned
//! into rotation angles by the integrator.

use nalgebra::Vector3;

use crate::components::aircraft::{AircraftBasis, ControlDeltas, FlightModelConfig};
use crate::utils::{safe_normalize, sign};

/// Roll rate for an explicit aileron command.
pub fn commanded_roll_rate(aileron: i8, config: &FlightModelConfig) -> f64 {
    config.roll_rate * f64::from(aileron)
}

/// Self-levelling roll rate, proportional to the square root of the bank
/// (measured by the vertical component of the left axis). Opposes the bank
/// while the aircraft is upright and reverses when it is inverted.
pub fn auto_level_roll_rate(basis: &AircraftBasis, config: &FlightModelConfig) -> f64 {
    sign(basis.up.z) * -sign(basis.left.z) * basis.left.z.abs().sqrt() * config.auto_level_gain
}

/// Elevator effectiveness in [0, 1]; vanishes as the wings approach vertical.
pub fn elevator_authority(left_z: f64) -> f64 {
    1.0 - left_z.powi(4)
}

/// Pitch rate for an explicit elevator command.
pub fn commanded_pitch_rate(elevator: i8, left_z: f64, config: &FlightModelConfig) -> f64 {
    config.pitch_rate * elevator_authority(left_z) * f64::from(elevator)
}

/// Pitch rate nudging the nose back to the horizon.
pub fn auto_pitch_rate(basis: &AircraftBasis, config: &FlightModelConfig) -> f64 {
    sign(basis.up.z) * sign(basis.forward.z) * basis.forward.z.abs().sqrt() * config.auto_pitch_gain
}

/// Roll rate for this tick: the command when one is pending, the
/// self-levelling law otherwise.
pub fn roll_rate(controls: &ControlDeltas, basis: &AircraftBasis, config: &FlightModelConfig) -> f64 {
    if controls.aileron != 0 {
        commanded_roll_rate(controls.aileron, config)
    } else {
        auto_level_roll_rate(basis, config)
    }
}

/// Pitch rate for this tick: the command when one is pending, the auto-pitch
/// law otherwise.
pub fn pitch_rate(controls: &ControlDeltas, basis: &AircraftBasis, config: &FlightModelConfig) -> f64 {
    if controls.elevator != 0 {
        commanded_pitch_rate(controls.elevator, basis.left.z, config)
    } else {
        auto_pitch_rate(basis, config)
    }
}

/// Sine of the bank angle, `sqrt(1 - (up · world_up)²)`.
pub fn bank_sine(up: &Vector3<f64>) -> f64 {
    (1.0 - up.z * up.z).max(0.0).sqrt()
}

/// Turn induced by banking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BankedTurn {
    /// Turn radius (m).
    pub radius: f64,
    /// Horizontal acceleration towards the centre of the turn, added to lift.
    pub centripetal: Vector3<f64>,
    /// Sign of the yaw about world vertical: -1, 0 or 1.
    pub yaw_direction: f64,
    /// Yaw rate magnitude (rad/s).
    pub yaw_rate: f64,
}

impl BankedTurn {
    /// Signed yaw angle about world vertical for a tick of length `dt`.
    pub fn yaw_angle(&self, dt: f64) -> f64 {
        self.yaw_direction * self.yaw_rate * dt
    }
}

/// Banked-turn coupling, or `None` while the bank is below the activation
/// threshold.
pub fn banked_turn(
    up: &Vector3<f64>,
    velocity: &Vector3<f64>,
    config: &FlightModelConfig,
) -> Option<BankedTurn> {
    let sine = bank_sine(up);
    if sine < config.min_bank_sine {
        return None;
    }

    let radius = config.turn_radius_gain / sine;
    let horizontal = safe_normalize(&Vector3::new(up.x, up.y, 0.0), Vector3::zeros());
    let centripetal = horizontal * velocity.norm_squared() / radius;

    Some(BankedTurn {
        radius,
        centripetal,
        yaw_direction: sign(velocity.cross(&centripetal).z),
        yaw_rate: velocity.norm() / radius,
    })
}
