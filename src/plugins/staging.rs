use bevy::prelude::*;

/// Ordering of the startup systems: the camera needs the aircraft entity.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildAircraft,
    BuildCameras,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (StartupStage::BuildAircraft, StartupStage::BuildCameras).chain(),
        );
    }
}
