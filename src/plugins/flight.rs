use bevy::prelude::*;

use crate::components::{
    AircraftSnapshot, ChaseCamera, ControlCommand, FlightDynamicsModel, PlayerController,
};
use crate::plugins::{StartupSequencePlugin, StartupStage};
use crate::resources::SimulationConfig;
use crate::systems::{
    aircraft_snapshot_system, apply_control_commands, camera_mouse_system, chase_camera_system,
    flight_dynamics_system, flight_keyboard_system, publish_view_system, ViewUpdated,
};

/// Stages of one fixed tick. The camera must see the aircraft after its
/// update, so the sets run strictly in this order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Dynamics,
    Snapshot,
    Camera,
    Publish,
}

/// Player aircraft, its chase camera and the fixed-tick pipeline between
/// them.
#[derive(Default)]
pub struct FlightPlugin {
    config: SimulationConfig,
}

impl FlightPlugin {
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    fn spawn_player_aircraft(mut commands: Commands, config: Res<SimulationConfig>) {
        let model = FlightDynamicsModel::new(config.flight, config.initial);
        info!(
            "Spawning player aircraft at {:?}, speed {}",
            model.position(),
            model.speed()
        );
        commands.spawn((
            model.snapshot(),
            model,
            PlayerController::new(),
            Name::new("Player Aircraft"),
        ));
    }

    fn spawn_chase_camera(
        mut commands: Commands,
        config: Res<SimulationConfig>,
        player: Query<(Entity, &AircraftSnapshot), With<PlayerController>>,
    ) {
        if let Ok((entity, snapshot)) = player.get_single() {
            info!("Spawning chase camera following {:?}", entity);
            commands.spawn((
                ChaseCamera::from_pose(snapshot, config.camera).with_target(entity),
                Name::new("Chase Camera"),
            ));
        } else {
            warn!("No player aircraft found when spawning chase camera!");
        }
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StartupSequencePlugin>() {
            app.add_plugins(StartupSequencePlugin);
        }

        app.insert_resource(self.config.clone())
            .insert_resource(Time::<Fixed>::from_seconds(self.config.timestep))
            .add_event::<ControlCommand>()
            .add_event::<ViewUpdated>()
            .configure_sets(
                FixedUpdate,
                (
                    FlightSet::Input,
                    FlightSet::Dynamics,
                    FlightSet::Snapshot,
                    FlightSet::Camera,
                    FlightSet::Publish,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                (
                    Self::spawn_player_aircraft.in_set(StartupStage::BuildAircraft),
                    Self::spawn_chase_camera.in_set(StartupStage::BuildCameras),
                ),
            )
            .add_systems(
                FixedUpdate,
                (
                    (flight_keyboard_system, apply_control_commands)
                        .chain()
                        .in_set(FlightSet::Input),
                    flight_dynamics_system.in_set(FlightSet::Dynamics),
                    aircraft_snapshot_system.in_set(FlightSet::Snapshot),
                    chase_camera_system.in_set(FlightSet::Camera),
                    publish_view_system.in_set(FlightSet::Publish),
                ),
            )
            .add_systems(Update, camera_mouse_system);
    }
}
