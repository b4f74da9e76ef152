use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;
use crate::components::{ChaseCameraConfig, FlightModelConfig, InitialConditions};

/// Top-level configuration of a flight session.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed simulation tick (s).
    pub timestep: f64,
    pub flight: FlightModelConfig,
    pub camera: ChaseCameraConfig,
    pub initial: InitialConditions,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0,
            flight: FlightModelConfig::default(),
            camera: ChaseCameraConfig::default(),
            initial: InitialConditions::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(invalid(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }

        for (name, value) in self.flight.named_values() {
            if !value.is_finite() {
                return Err(invalid(format!("flight.{} must be finite, got {}", name, value)));
            }
        }
        if self.flight.max_speed < 0.0 {
            return Err(invalid(format!(
                "flight.max_speed must not be negative, got {}",
                self.flight.max_speed
            )));
        }
        if self.flight.rotation_threshold <= 0.0 || self.flight.velocity_epsilon <= 0.0 {
            return Err(invalid("flight thresholds must be positive".to_string()));
        }
        if self.flight.turn_radius_gain <= 0.0 {
            return Err(invalid("flight.turn_radius_gain must be positive".to_string()));
        }

        let camera = &self.camera;
        let camera_values = [
            ("tracking_rate", camera.tracking_rate),
            ("debounce_time", camera.debounce_time),
            ("stationary_threshold", camera.stationary_threshold),
            ("free_look_step", camera.free_look_step),
            ("follow_distance", camera.follow_distance),
            ("height_bias", camera.height_bias),
            ("mouse_sensitivity", camera.mouse_sensitivity),
        ];
        for (name, value) in camera_values {
            if !value.is_finite() {
                return Err(invalid(format!("camera.{} must be finite, got {}", name, value)));
            }
        }
        if camera.debounce_time < 0.0 || camera.tracking_rate < 0.0 {
            return Err(invalid(
                "camera debounce_time and tracking_rate must not be negative".to_string(),
            ));
        }
        if camera.stationary_threshold <= 0.0 {
            return Err(invalid("camera.stationary_threshold must be positive".to_string()));
        }

        let initial = &self.initial;
        if !(0.0..=self.flight.max_speed).contains(&initial.speed) {
            return Err(invalid(format!(
                "initial.speed {} outside [0, {}]",
                initial.speed, self.flight.max_speed
            )));
        }
        if !crate::utils::is_finite(&initial.position) || !crate::utils::is_finite(&initial.velocity)
        {
            return Err(invalid("initial position and velocity must be finite".to_string()));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.timestep, 1.0 / 60.0);
        assert_eq!(config.flight.max_speed, 3.0);
        assert_eq!(config.camera.debounce_time, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() -> Result<(), ConfigError> {
        let config = SimulationConfig::from_yaml_str(
            "timestep: 0.01\nflight:\n  max_speed: 2.5\ncamera:\n  debounce_time: 0.25\n",
        )?;
        assert_eq!(config.timestep, 0.01);
        assert_eq!(config.flight.max_speed, 2.5);
        assert_eq!(config.flight.thrust_gain, 15.0);
        assert_eq!(config.camera.debounce_time, 0.25);
        assert_eq!(config.camera.tracking_rate, 0.2);
        assert_eq!(config.initial, InitialConditions::default());
        Ok(())
    }

    #[test]
    fn test_config_save_load() -> Result<(), ConfigError> {
        let mut config = SimulationConfig::default();
        config.timestep = 1.0 / 120.0;
        config.camera.follow_distance = 0.5;

        let temp_file = NamedTempFile::new()?;
        config.save(temp_file.path())?;
        let loaded = SimulationConfig::load(temp_file.path())?;

        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_invalid_config_load() {
        let result = SimulationConfig::load("nonexistent_file.yaml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = SimulationConfig::from_yaml_str("timestep: [1, 2");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_rejects_non_positive_timestep() {
        let result = SimulationConfig::from_yaml_str("timestep: 0.0");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_initial_speed_above_clamp() {
        let mut config = SimulationConfig::default();
        config.initial.speed = 4.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
