use bevy::prelude::*;
use nalgebra::{Rotation3, Unit, Vector3};

use crate::components::aircraft::AircraftPose;
use crate::components::{CameraMode, ChaseCamera};
use crate::utils::{any_orthogonal, safe_normalize, NORMALIZE_EPSILON};

/// Debounce timers within this of zero count as expired, so that a whole
/// number of fixed ticks covers the grace period despite rounding.
const TIMER_EPSILON: f64 = 1e-9;

impl ChaseCamera {
    /// Follow the aircraft for one fixed timestep `dt` (s).
    ///
    /// The camera stays put while its look direction matches the aircraft
    /// nose. A mismatch first arms the debounce timer; only once it has run
    /// out does the look direction move, by at most `tracking_rate * dt` per
    /// tick, snapping onto the nose when closer than that. Once armed the
    /// timer is not re-armed by further changes; it is cancelled if the
    /// mismatch disappears before it expires.
    pub fn update_view<P: AircraftPose>(&mut self, pose: &P, dt: f64) {
        let position = pose.position();
        let target = safe_normalize(&pose.forward_direction(), self.direction);
        let previous_direction = self.direction;
        let position_changed = position != self.position;
        self.position = position;

        let delta = target - self.direction;
        let distance = delta.norm();
        let settled = distance < self.config.stationary_threshold;

        let next = match self.mode {
            CameraMode::Stationary if settled => CameraMode::Stationary,
            CameraMode::Stationary => CameraMode::Debouncing {
                remaining: self.config.debounce_time,
            },
            CameraMode::Debouncing { .. } if settled => CameraMode::Stationary,
            CameraMode::Debouncing { remaining } => {
                let remaining = remaining - dt;
                if remaining <= TIMER_EPSILON {
                    CameraMode::Tracking
                } else {
                    CameraMode::Debouncing { remaining }
                }
            }
            CameraMode::Tracking if settled => CameraMode::Stationary,
            CameraMode::Tracking => {
                let budget = self.config.tracking_rate * dt;
                self.direction = step_towards(&self.direction, &target, distance, budget);
                CameraMode::Tracking
            }
        };

        if std::mem::discriminant(&next) != std::mem::discriminant(&self.mode) {
            debug!("chase camera {:?} -> {:?}", self.mode, next);
        }
        self.mode = next;

        if position_changed || self.direction != previous_direction {
            self.dirty = true;
        }
        self.debug_check_invariants();
    }
}

/// Turn the unit vector `current` towards `target` by an arc of at most
/// `budget`, snapping onto `target` once their chord is shorter than that.
pub(crate) fn step_towards(
    current: &Vector3<f64>,
    target: &Vector3<f64>,
    distance: f64,
    budget: f64,
) -> Vector3<f64> {
    if distance < budget {
        return *target;
    }
    let axis = Unit::try_new(current.cross(target), NORMALIZE_EPSILON)
        .unwrap_or_else(|| Unit::new_normalize(any_orthogonal(current)));
    safe_normalize(&(Rotation3::from_axis_angle(&axis, budget) * current), *target)
}
