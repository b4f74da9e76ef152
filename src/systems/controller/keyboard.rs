use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::components::aircraft::ControlCommand;
use crate::resources::SimulationConfig;

/// Maps held keys to flight commands.
///
/// Arrow keys drive ailerons (left/right) and elevator (up pushes the nose
/// down), W/S drive the throttle. Runs without a keyboard resource in
/// headless apps.
pub fn flight_keyboard_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut commands: EventWriter<ControlCommand>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    let bindings = [
        (KeyCode::ArrowLeft, ControlCommand::Roll(-1)),
        (KeyCode::ArrowRight, ControlCommand::Roll(1)),
        (KeyCode::ArrowUp, ControlCommand::Elevate(1)),
        (KeyCode::ArrowDown, ControlCommand::Elevate(-1)),
        (KeyCode::KeyW, ControlCommand::Throttle(1)),
        (KeyCode::KeyS, ControlCommand::Throttle(-1)),
    ];
    for (key, command) in bindings {
        if keyboard.pressed(key) {
            commands.send(command);
        }
    }
}

/// Turns mouse motion into chase-camera free look.
pub fn camera_mouse_system(
    motion: Option<Res<AccumulatedMouseMotion>>,
    config: Res<SimulationConfig>,
    mut commands: EventWriter<ControlCommand>,
) {
    let Some(motion) = motion else {
        return;
    };
    if motion.delta == Vec2::ZERO {
        return;
    }

    let sensitivity = config.camera.mouse_sensitivity;
    commands.send(ControlCommand::Look {
        dx: (f64::from(motion.delta.x) * sensitivity).clamp(-1.0, 1.0),
        dy: (f64::from(motion.delta.y) * sensitivity).clamp(-1.0, 1.0),
    });
}
