use bevy::prelude::*;
use nalgebra::{Rotation3, Unit, Vector3};

use crate::components::aircraft::{
    AircraftBasis, AircraftSnapshot, AircraftState, FlightDynamicsModel, ForceBreakdown,
};
use crate::resources::SimulationConfig;
use crate::systems::flight::{control_laws, forces};
use crate::utils::{is_finite, is_orthonormal, orthonormalize};

/// Tolerance of the basis invariant checked in debug builds.
const BASIS_TOLERANCE: f64 = 1e-9;

/// Advances every flight model by the configured fixed timestep.
pub fn flight_dynamics_system(
    mut query: Query<&mut FlightDynamicsModel>,
    config: Res<SimulationConfig>,
) {
    let dt = config.timestep;
    for mut model in query.iter_mut() {
        model.update(dt);
    }
}

/// Publishes the post-update pose of each aircraft for the camera and for
/// external consumers.
pub fn aircraft_snapshot_system(mut query: Query<(&FlightDynamicsModel, &mut AircraftSnapshot)>) {
    for (model, mut snapshot) in query.iter_mut() {
        *snapshot = model.snapshot();
    }
}

impl FlightDynamicsModel {
    /// Advance the aircraft by one fixed timestep `dt` (s) and clear the
    /// pending control deltas.
    pub fn update(&mut self, dt: f64) {
        let config = self.config;
        let controls = self.controls;
        let state = &mut self.state;

        state.speed = (state.speed + config.throttle_rate * f64::from(controls.throttle) * dt)
            .clamp(0.0, config.max_speed);

        let roll_angle = control_laws::roll_rate(&controls, &state.basis, &config) * dt;
        rotate_about_body_axis(state, Vector3::x_axis(), roll_angle, config.rotation_threshold);

        let pitch_angle = control_laws::pitch_rate(&controls, &state.basis, &config) * dt;
        rotate_about_body_axis(state, Vector3::y_axis(), pitch_angle, config.rotation_threshold);

        let basis = state.basis;
        let velocity = state.velocity;
        let mut applied = ForceBreakdown {
            thrust: forces::thrust(&basis.forward, state.speed, &config),
            drag: forces::drag(&velocity, &config),
            gravity: forces::gravity(&config),
            lift: forces::vertical_lift(&basis, &velocity, &config),
        };

        if let Some(turn) = control_laws::banked_turn(&basis.up, &velocity, &config) {
            applied.lift += turn.centripetal;
            if turn.yaw_direction != 0.0 {
                yaw_about_world_vertical(state, turn.yaw_angle(dt));
            }
        }

        state.velocity += applied.total() * dt;
        state.position += state.velocity * dt;

        self.last_forces = applied;
        self.controls.clear();

        self.debug_check_invariants();
    }

    fn debug_check_invariants(&self) {
        let AircraftBasis { forward, left, up } = self.state.basis;
        debug_assert!(
            is_orthonormal(&forward, &left, &up, BASIS_TOLERANCE),
            "aircraft basis lost orthonormality: {:?}",
            self.state.basis
        );
        debug_assert!(
            is_finite(&self.state.position) && is_finite(&self.state.velocity),
            "aircraft state is not finite: {:?}",
            self.state
        );
    }
}

/// Rotate about a body axis (post-multiplication) unless the angle is
/// negligible, then re-orthonormalize.
fn rotate_about_body_axis(
    state: &mut AircraftState,
    axis: Unit<Vector3<f64>>,
    angle: f64,
    threshold: f64,
) {
    if angle.abs() > threshold {
        state.attitude *= Rotation3::from_axis_angle(&axis, angle);
    }
    refresh_basis(state);
}

/// Rotate the whole body frame about world vertical (pre-multiplication).
fn yaw_about_world_vertical(state: &mut AircraftState, angle: f64) {
    state.attitude = Rotation3::from_axis_angle(&Vector3::z_axis(), angle) * state.attitude;
    refresh_basis(state);
}

fn refresh_basis(state: &mut AircraftState) {
    state.attitude = orthonormalize(&state.attitude);
    state.basis = AircraftBasis::from_rotation(&state.attitude);
}
