use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Discrete per-tick commands, each in {-1, 0, 1}.
///
/// Commands issued during a tick add up and saturate at ±1; the flight model
/// consumes and clears all of them at the end of its update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlDeltas {
    pub aileron: i8,
    pub elevator: i8,
    pub throttle: i8,
}

impl ControlDeltas {
    pub fn roll(&mut self, direction: i8) {
        self.aileron = accumulate(self.aileron, direction);
    }

    pub fn elevate(&mut self, direction: i8) {
        self.elevator = accumulate(self.elevator, direction);
    }

    pub fn throttle(&mut self, direction: i8) {
        self.throttle = accumulate(self.throttle, direction);
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn accumulate(current: i8, direction: i8) -> i8 {
    current.saturating_add(direction.signum()).clamp(-1, 1)
}

/// Programmatic input to the player aircraft and its chase camera.
#[derive(Event, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlCommand {
    Roll(i8),
    Elevate(i8),
    Throttle(i8),
    /// Free-look adjustment of the chase camera, magnitudes roughly in [-1, 1].
    Look { dx: f64, dy: f64 },
}
