use bevy::prelude::*;
use nalgebra::{Matrix4, Point3, Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::components::aircraft::AircraftPose;
use crate::utils::{is_finite, safe_normalize};

/// Tuning of the chase camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseCameraConfig {
    /// Maximum look-direction correction per second (chord length).
    pub tracking_rate: f64,
    /// Grace period between noticing a direction change and tracking it (s).
    pub debounce_time: f64,
    /// Direction deltas below this leave the camera stationary.
    pub stationary_threshold: f64,
    /// Free-look angle for a unit `rotate` input (rad).
    pub free_look_step: f64,
    /// Distance of the eye behind the aircraft.
    pub follow_distance: f64,
    /// Eye height added per unit of `1 - direction.z`.
    pub height_bias: f64,
    /// Scale from raw mouse motion to `rotate` input.
    pub mouse_sensitivity: f64,
}

impl Default for ChaseCameraConfig {
    fn default() -> Self {
        Self {
            tracking_rate: 0.2,
            debounce_time: 0.5,
            stationary_threshold: 1e-4,
            free_look_step: PI / 6.0,
            follow_distance: 0.2,
            height_bias: 0.06,
            mouse_sensitivity: 0.01,
        }
    }
}

/// Tracking state of the chase camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CameraMode {
    /// Look direction matches the aircraft and is held.
    Stationary,
    /// A direction change was seen; corrections wait for the timer (s).
    Debouncing { remaining: f64 },
    /// Look direction converges on the aircraft at a bounded rate.
    Tracking,
}

/// Smoothed camera following one aircraft.
///
/// The view transform is cached and only rebuilt by `view` after `rotate` or
/// `update_view` changed one of its inputs.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct ChaseCamera {
    /// Aircraft entity whose snapshot drives this camera.
    #[serde(skip)]
    pub target: Option<Entity>,
    pub(crate) config: ChaseCameraConfig,
    /// Last aircraft position read (the view centre).
    pub(crate) position: Vector3<f64>,
    /// Smoothed look direction, unit length.
    pub(crate) direction: Vector3<f64>,
    pub(crate) up: Vector3<f64>,
    pub(crate) mode: CameraMode,
    pub(crate) view: Matrix4<f64>,
    pub(crate) dirty: bool,
}

impl ChaseCamera {
    /// Camera at the aircraft position, looking along its nose, stationary.
    pub fn from_pose<P: AircraftPose>(pose: &P, config: ChaseCameraConfig) -> Self {
        let up = safe_normalize(&pose.up_direction(), Vector3::z());
        Self {
            target: None,
            config,
            position: pose.position(),
            direction: safe_normalize(&pose.forward_direction(), Vector3::x()),
            up,
            mode: CameraMode::Stationary,
            view: Matrix4::identity(),
            dirty: true,
        }
    }

    pub fn with_target(mut self, target: Entity) -> Self {
        self.target = Some(target);
        self
    }

    /// Free-look adjustment independent of the aircraft attitude. Positive
    /// `dx` looks right, positive `dy` looks down.
    pub fn rotate(&mut self, dx: f64, dy: f64) {
        let step = self.config.free_look_step;
        if dy != 0.0 {
            let axis = self.up.cross(&self.direction);
            if let Some(axis) = Unit::try_new(axis, crate::utils::NORMALIZE_EPSILON) {
                let turned = Rotation3::from_axis_angle(&axis, step * dy) * self.direction;
                self.direction = safe_normalize(&turned, self.direction);
            }
        }
        if dx != 0.0 {
            let axis = Unit::new_normalize(-self.up);
            let turned = Rotation3::from_axis_angle(&axis, step * dx) * self.direction;
            self.direction = safe_normalize(&turned, self.direction);
        }
        self.dirty = true;
    }

    /// The view transform, rebuilt only when an input changed since the last
    /// call.
    pub fn view(&mut self) -> Matrix4<f64> {
        if self.dirty {
            let direction = safe_normalize(&self.direction, Vector3::x());
            let eye = self.position - direction * self.config.follow_distance
                + Vector3::new(0.0, 0.0, (1.0 - direction.z) * self.config.height_bias);
            let view = Matrix4::look_at_rh(
                &Point3::from(eye),
                &Point3::from(self.position),
                &self.up,
            );
            if view.iter().all(|c| c.is_finite()) {
                self.view = view;
            } else {
                warn!(
                    "degenerate chase view (direction {:?}, up {:?}), keeping previous transform",
                    direction, self.up
                );
            }
            self.dirty = false;
        }
        self.view
    }

    /// Whether `view` would rebuild the transform.
    pub fn view_changed(&self) -> bool {
        self.dirty
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn is_stationary(&self) -> bool {
        self.mode == CameraMode::Stationary
    }

    pub fn look_direction(&self) -> Vector3<f64> {
        self.direction
    }

    pub fn up(&self) -> Vector3<f64> {
        self.up
    }

    /// Centre of the view: the aircraft position read by the last update.
    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    pub fn config(&self) -> &ChaseCameraConfig {
        &self.config
    }

    pub(crate) fn debug_check_invariants(&self) {
        debug_assert!(
            is_finite(&self.direction) && (self.direction.norm() - 1.0).abs() < 1e-9,
            "camera look direction is not a unit vector: {:?}",
            self.direction
        );
    }
}
