use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Constants of the simplified flight model.
///
/// The force gains are not derived from airfoil data; they are tuned so the
/// aircraft cruises at a few metres per second over the procedural terrain.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightModelConfig {
    /// Upper clamp of the target speed (throttle setting).
    pub max_speed: f64,
    /// Target speed change per second for a full throttle command.
    pub throttle_rate: f64,
    /// Commanded roll rate for a full aileron deflection (rad/s).
    pub roll_rate: f64,
    /// Gain of the self-levelling roll law (rad/s).
    pub auto_level_gain: f64,
    /// Commanded pitch rate for a full elevator deflection at wings level (rad/s).
    pub pitch_rate: f64,
    /// Gain of the auto-pitch law (rad/s).
    pub auto_pitch_gain: f64,
    /// Rotations with an angle at or below this are skipped (rad).
    pub rotation_threshold: f64,
    pub thrust_gain: f64,
    pub drag_gain: f64,
    /// Magnitude of the downward gravitational acceleration.
    pub gravity: f64,
    pub lift_gain: f64,
    /// Banked-turn coupling is only active above this bank sine.
    pub min_bank_sine: f64,
    /// Turn radius at a bank sine of one.
    pub turn_radius_gain: f64,
    /// Speeds below this produce no drag.
    pub velocity_epsilon: f64,
}

impl Default for FlightModelConfig {
    fn default() -> Self {
        Self {
            max_speed: 3.0,
            throttle_rate: 0.5,
            roll_rate: PI / 3.0,
            auto_level_gain: PI / 6.0,
            pitch_rate: PI / 4.0,
            auto_pitch_gain: PI / 4.0,
            rotation_threshold: 1e-5,
            thrust_gain: 15.0,
            drag_gain: 15.0,
            gravity: 6.0,
            lift_gain: 6.0,
            min_bank_sine: 0.1,
            turn_radius_gain: 3.8,
            velocity_epsilon: 1e-9,
        }
    }
}

impl FlightModelConfig {
    /// Every gain and threshold, for validation.
    pub(crate) fn named_values(&self) -> [(&'static str, f64); 14] {
        [
            ("max_speed", self.max_speed),
            ("throttle_rate", self.throttle_rate),
            ("roll_rate", self.roll_rate),
            ("auto_level_gain", self.auto_level_gain),
            ("pitch_rate", self.pitch_rate),
            ("auto_pitch_gain", self.auto_pitch_gain),
            ("rotation_threshold", self.rotation_threshold),
            ("thrust_gain", self.thrust_gain),
            ("drag_gain", self.drag_gain),
            ("gravity", self.gravity),
            ("lift_gain", self.lift_gain),
            ("min_bank_sine", self.min_bank_sine),
            ("turn_radius_gain", self.turn_radius_gain),
            ("velocity_epsilon", self.velocity_epsilon),
        ]
    }
}
