use bevy::prelude::*;
use fly::{
    components::{ChaseCamera, ControlCommand, FlightDynamicsModel, PlayerController},
    plugins::FlightPlugin,
    resources::SimulationConfig,
    systems::ViewUpdated,
};

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: SimulationConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.config.timestep = timestep;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(FlightPlugin::with_config(self.config));

        // Runs Startup so the aircraft and camera exist
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
///
/// Fixed ticks are driven directly so tests do not depend on wall-clock time.
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn send(&mut self, command: ControlCommand) {
        self.app.world_mut().send_event(command);
    }

    pub fn player(&mut self) -> Option<FlightDynamicsModel> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&FlightDynamicsModel, With<PlayerController>>();
        query.get_single(world).ok().cloned()
    }

    pub fn camera(&mut self) -> Option<ChaseCamera> {
        self.query_single::<ChaseCamera>().cloned()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }

    /// Drains the view updates published since the last call
    pub fn drain_view_updates(&mut self) -> Vec<ViewUpdated> {
        let mut events = self.app.world_mut().resource_mut::<Events<ViewUpdated>>();
        events.drain().collect()
    }
}
