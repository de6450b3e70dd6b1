use bevy::prelude::*;
use flight_dynamics::{
    components::AircraftConfig,
    plugins::{aircraft_bundle, FlightDynamicsPlugin},
    SpatialComponent,
};

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    aircraft: Vec<(AircraftConfig, SpatialComponent)>,
    time_step: f64,
    seed: u64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            aircraft: Vec::new(),
            time_step: 1.0 / 50.0,
            seed: 42,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aircraft(mut self, config: AircraftConfig, spatial: SpatialComponent) -> Self {
        self.aircraft.push((config, spatial));
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(FlightDynamicsPlugin::new(self.time_step));

        let mut entities = Vec::new();
        for (i, (config, spatial)) in self.aircraft.into_iter().enumerate() {
            let bundle = aircraft_bundle(config, spatial, Some(self.seed + i as u64))
                .expect("test aircraft config should be valid");
            entities.push(app.world_mut().spawn(bundle).id());
        }

        TestApp { app, entities }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub entities: Vec<Entity>,
}

impl TestApp {
    /// Run the fixed-step schedule directly, independent of wall-clock time
    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn aircraft(&self) -> Entity {
        self.entities[0]
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.app.world().get::<T>(entity)
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<Mut<T>> {
        self.app.world_mut().get_mut::<T>(entity)
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }
}
