use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Initial conditions of the player aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditions {
    /// Position in world space (m), z up.
    pub position: Vector3<f64>,
    /// Velocity in world space (m/s).
    pub velocity: Vector3<f64>,
    /// Target speed (throttle setting).
    pub speed: f64,
    /// Body-to-world rotation; identity points the nose along +X with +Z up.
    pub attitude: Rotation3<f64>,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 1.2),
            velocity: Vector3::new(1.0, 1.0, 1.0),
            speed: 1.0,
            attitude: Rotation3::identity(),
        }
    }
}

impl InitialConditions {
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_attitude(mut self, attitude: Rotation3<f64>) -> Self {
        self.attitude = attitude;
        self
    }
}
