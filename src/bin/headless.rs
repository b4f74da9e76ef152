use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use std::time::Duration;

use fly::{
    components::{ControlCommand, FlightDynamicsModel, PlayerController},
    plugins::{FlightPlugin, FlightSet},
    resources::SimulationConfig,
    systems::{apply_control_commands, ViewUpdated},
    utils::rad_to_deg,
};

/// Simulated seconds before the app exits.
const FLIGHT_DURATION: f64 = 10.0;

#[derive(Resource, Default)]
struct FlightClock {
    ticks: u64,
    views: u64,
}

impl FlightClock {
    fn elapsed(&self, timestep: f64) -> f64 {
        self.ticks as f64 * timestep
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load(&path)?,
        None => SimulationConfig::default(),
    };
    let timestep = config.timestep;

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                timestep,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(FlightPlugin::with_config(config))
        .init_resource::<FlightClock>()
        .add_systems(
            FixedUpdate,
            scripted_manoeuvre
                .in_set(FlightSet::Input)
                .before(apply_control_commands),
        )
        .add_systems(
            FixedUpdate,
            (log_flight, advance_clock)
                .chain()
                .after(FlightSet::Publish),
        )
        .run();

    Ok(())
}

/// Throttle up for two seconds, then bank right for half a second and let
/// the aircraft level itself.
fn scripted_manoeuvre(
    clock: Res<FlightClock>,
    config: Res<SimulationConfig>,
    mut commands: EventWriter<ControlCommand>,
) {
    let t = clock.elapsed(config.timestep);
    if t < 2.0 {
        commands.send(ControlCommand::Throttle(1));
    }
    if (3.0..3.5).contains(&t) {
        commands.send(ControlCommand::Roll(1));
    }
}

fn log_flight(
    mut clock: ResMut<FlightClock>,
    config: Res<SimulationConfig>,
    mut views: EventReader<ViewUpdated>,
    aircraft: Query<&FlightDynamicsModel, With<PlayerController>>,
) {
    clock.views += views.read().count() as u64;

    let ticks_per_second = (1.0 / config.timestep).round().max(1.0) as u64;
    if clock.ticks % ticks_per_second != 0 {
        return;
    }
    if let Ok(model) = aircraft.get_single() {
        info!(
            "t={:.1}s position={:.3?} speed={:.3} bank={:.1}deg views={}",
            clock.elapsed(config.timestep),
            model.position().as_slice(),
            model.speed(),
            rad_to_deg(model.bank_angle()),
            clock.views
        );
    }
}

fn advance_clock(
    mut clock: ResMut<FlightClock>,
    config: Res<SimulationConfig>,
    mut exit: EventWriter<AppExit>,
) {
    clock.ticks += 1;
    if clock.elapsed(config.timestep) >= FLIGHT_DURATION {
        info!("Flight finished after {} ticks", clock.ticks);
        exit.send(AppExit::Success);
    }
}
