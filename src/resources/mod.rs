pub mod config;

pub use config::{ConfigError, SimulationConfig};
