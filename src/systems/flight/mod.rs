pub mod control_laws;
mod dynamics;
pub mod forces;

pub use dynamics::{aircraft_snapshot_system, flight_dynamics_system};
