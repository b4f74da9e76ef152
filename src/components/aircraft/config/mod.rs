mod flight;
mod start;

pub use flight::FlightModelConfig;
pub use start::InitialConditions;
