use bevy::prelude::*;
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Read-only view of an aircraft pose, as consumed by the chase camera and by
/// external renderers.
pub trait AircraftPose {
    /// Position in world space (m).
    fn position(&self) -> Vector3<f64>;
    /// Unit vector along the aircraft nose.
    fn forward_direction(&self) -> Vector3<f64>;
    /// Unit vector out of the aircraft canopy.
    fn up_direction(&self) -> Vector3<f64>;
}

/// Orthonormal body axes expressed in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftBasis {
    pub forward: Vector3<f64>,
    pub left: Vector3<f64>,
    pub up: Vector3<f64>,
}

impl Default for AircraftBasis {
    fn default() -> Self {
        Self {
            forward: Vector3::x(),
            left: Vector3::y(),
            up: Vector3::z(),
        }
    }
}

impl AircraftBasis {
    /// Columns of an (already orthonormal) body-to-world rotation.
    pub fn from_rotation(rotation: &Rotation3<f64>) -> Self {
        let m = rotation.matrix();
        Self {
            forward: m.column(0).into_owned(),
            left: m.column(1).into_owned(),
            up: m.column(2).into_owned(),
        }
    }
}

/// Kinematic state of the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position in world space (m).
    pub position: Vector3<f64>,
    /// Velocity in world space (m/s).
    pub velocity: Vector3<f64>,
    /// Accumulated body-to-world rotation, re-orthonormalized every tick.
    pub attitude: Rotation3<f64>,
    /// Body axes extracted from `attitude`.
    pub basis: AircraftBasis,
    /// Target speed commanded by the throttle.
    pub speed: f64,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: Rotation3::identity(),
            basis: AircraftBasis::default(),
            speed: 0.0,
        }
    }
}

/// Copy of the aircraft pose taken once per tick, after the dynamics update.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftSnapshot {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub basis: AircraftBasis,
    pub speed: f64,
}

impl Default for AircraftSnapshot {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            basis: AircraftBasis::default(),
            speed: 0.0,
        }
    }
}

impl AircraftSnapshot {
    /// A pose with the given position and forward direction, wings level when
    /// the forward direction allows it. Mostly useful for driving the camera
    /// without a flight model.
    pub fn looking_along(position: Vector3<f64>, forward: Vector3<f64>) -> Self {
        let forward = crate::utils::safe_normalize(&forward, Vector3::x());
        let left = crate::utils::safe_normalize(&Vector3::z().cross(&forward), Vector3::y());
        let up = forward.cross(&left);
        Self {
            position,
            basis: AircraftBasis { forward, left, up },
            ..Default::default()
        }
    }
}

impl AircraftPose for AircraftSnapshot {
    fn position(&self) -> Vector3<f64> {
        self.position
    }

    fn forward_direction(&self) -> Vector3<f64> {
        self.basis.forward
    }

    fn up_direction(&self) -> Vector3<f64> {
        self.basis.up
    }
}

/// Forces (per unit mass) applied during the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceBreakdown {
    pub thrust: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub gravity: Vector3<f64>,
    /// Vertical lift plus the centripetal term of a banked turn.
    pub lift: Vector3<f64>,
}

impl Default for ForceBreakdown {
    fn default() -> Self {
        Self {
            thrust: Vector3::zeros(),
            drag: Vector3::zeros(),
            gravity: Vector3::zeros(),
            lift: Vector3::zeros(),
        }
    }
}

impl ForceBreakdown {
    pub fn total(&self) -> Vector3<f64> {
        self.thrust + self.drag + self.gravity + self.lift
    }
}
