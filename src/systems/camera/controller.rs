use bevy::prelude::*;
use nalgebra::Matrix4;

use crate::components::aircraft::AircraftSnapshot;
use crate::components::ChaseCamera;
use crate::resources::SimulationConfig;

/// Emitted when a chase camera's view transform changed this tick.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ViewUpdated {
    pub camera: Entity,
    pub view: Matrix4<f64>,
}

/// Moves every chase camera after its aircraft, reading the snapshot taken
/// after this tick's dynamics update.
pub fn chase_camera_system(
    mut cameras: Query<&mut ChaseCamera>,
    aircraft: Query<&AircraftSnapshot>,
    config: Res<SimulationConfig>,
) {
    let dt = config.timestep;
    for mut camera in cameras.iter_mut() {
        let Some(target) = camera.target else {
            continue;
        };
        match aircraft.get(target) {
            Ok(snapshot) => camera.update_view(snapshot, dt),
            Err(_) => warn!("chase camera target {:?} has no aircraft snapshot", target),
        }
    }
}

/// Polls each camera's dirty flag and forwards changed view transforms to the
/// renderer.
pub fn publish_view_system(
    mut cameras: Query<(Entity, &mut ChaseCamera)>,
    mut events: EventWriter<ViewUpdated>,
) {
    for (entity, mut camera) in cameras.iter_mut() {
        if camera.view_changed() {
            let view = camera.view();
            events.send(ViewUpdated {
                camera: entity,
                view,
            });
        }
    }
}
