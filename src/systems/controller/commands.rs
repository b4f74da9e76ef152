use bevy::prelude::*;

use crate::components::aircraft::{ControlCommand, FlightDynamicsModel};
use crate::components::{ChaseCamera, PlayerController};

/// Applies queued commands to the active player aircraft and to the chase
/// cameras following it.
pub fn apply_control_commands(
    mut commands: EventReader<ControlCommand>,
    mut aircraft: Query<(Entity, &mut FlightDynamicsModel, &PlayerController)>,
    mut cameras: Query<&mut ChaseCamera>,
) {
    let Some((player, mut model, _)) = aircraft
        .iter_mut()
        .find(|(_, _, controller)| controller.active)
    else {
        // Drain so stale commands do not pile up for a later player.
        commands.clear();
        return;
    };

    for command in commands.read() {
        match *command {
            ControlCommand::Roll(direction) => model.roll(direction),
            ControlCommand::Elevate(direction) => model.elevate(direction),
            ControlCommand::Throttle(direction) => model.throttle(direction),
            ControlCommand::Look { dx, dy } => {
                for mut camera in cameras.iter_mut() {
                    if camera.target == Some(player) {
                        camera.rotate(dx, dy);
                    }
                }
            }
        }
    }
}
