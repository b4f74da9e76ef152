mod flight;
mod staging;

pub use flight::{FlightPlugin, FlightSet};
pub use staging::{StartupSequencePlugin, StartupStage};
