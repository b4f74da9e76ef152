mod errors;
mod simulation;

pub use errors::ConfigError;
pub use simulation::SimulationConfig;
