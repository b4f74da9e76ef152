use bevy::prelude::*;
use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::aircraft::{
    AircraftBasis, AircraftPose, AircraftSnapshot, AircraftState, ControlDeltas,
    FlightModelConfig, ForceBreakdown, InitialConditions,
};
use crate::utils::orthonormalize;

/// Player aircraft: kinematic state, pending control deltas and the constants
/// of its flight model. Advanced by `update` (see `systems::flight`).
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct FlightDynamicsModel {
    pub(crate) state: AircraftState,
    pub(crate) controls: ControlDeltas,
    pub(crate) config: FlightModelConfig,
    pub(crate) last_forces: ForceBreakdown,
}

impl Default for FlightDynamicsModel {
    fn default() -> Self {
        Self::new(FlightModelConfig::default(), InitialConditions::default())
    }
}

impl FlightDynamicsModel {
    pub fn new(config: FlightModelConfig, initial: InitialConditions) -> Self {
        let attitude = orthonormalize(&initial.attitude);
        Self {
            state: AircraftState {
                position: initial.position,
                velocity: initial.velocity,
                attitude,
                basis: AircraftBasis::from_rotation(&attitude),
                speed: initial.speed.clamp(0.0, config.max_speed),
            },
            controls: ControlDeltas::default(),
            config,
            last_forces: ForceBreakdown::default(),
        }
    }

    /// Queue a roll command for the next update: +1 rolls right wing down.
    pub fn roll(&mut self, direction: i8) {
        self.controls.roll(direction);
    }

    /// Queue an elevator command for the next update: +1 pitches the nose down.
    pub fn elevate(&mut self, direction: i8) {
        self.controls.elevate(direction);
    }

    /// Queue a throttle command for the next update.
    pub fn throttle(&mut self, direction: i8) {
        self.controls.throttle(direction);
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    pub fn controls(&self) -> &ControlDeltas {
        &self.controls
    }

    pub fn config(&self) -> &FlightModelConfig {
        &self.config
    }

    pub fn position(&self) -> Vector3<f64> {
        self.state.position
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.state.velocity
    }

    pub fn forward_direction(&self) -> Vector3<f64> {
        self.state.basis.forward
    }

    pub fn left_direction(&self) -> Vector3<f64> {
        self.state.basis.left
    }

    pub fn up_direction(&self) -> Vector3<f64> {
        self.state.basis.up
    }

    /// Target speed set by the throttle, in [0, max_speed].
    pub fn speed(&self) -> f64 {
        self.state.speed
    }

    /// Angle between the body up axis and world vertical (rad).
    pub fn bank_angle(&self) -> f64 {
        self.state.basis.up.z.clamp(-1.0, 1.0).acos()
    }

    pub fn last_forces(&self) -> &ForceBreakdown {
        &self.last_forces
    }

    /// Model matrix placing the aircraft mesh: translation × rotation.
    pub fn model_transform(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&self.state.position) * self.state.attitude.to_homogeneous()
    }

    pub fn snapshot(&self) -> AircraftSnapshot {
        AircraftSnapshot {
            position: self.state.position,
            velocity: self.state.velocity,
            basis: self.state.basis,
            speed: self.state.speed,
        }
    }
}

impl AircraftPose for FlightDynamicsModel {
    fn position(&self) -> Vector3<f64> {
        FlightDynamicsModel::position(self)
    }

    fn forward_direction(&self) -> Vector3<f64> {
        FlightDynamicsModel::forward_direction(self)
    }

    fn up_direction(&self) -> Vector3<f64> {
        FlightDynamicsModel::up_direction(self)
    }
}
