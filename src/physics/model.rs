use bevy::log::{debug, warn};
use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::{NoiseSource, RandomSource};
use crate::components::{
    AircraftConfig, ConfigError, FlightState, Force, ForceCategory, Moment, SpatialComponent,
    StallStatus, Telemetry, ThrottleCommand,
};
use crate::resources::EnvironmentModel;
use crate::systems::{
    calculate_flight_state, calculate_lift_drag, calculate_thrust, AeroCoefficients,
    AeroCurveTable, FuelSystem, StallStateMachine,
};
use crate::utils::{PerlinNoise, RngManager, RngSource};

/// Everything one tick hands to the host integrator. Vectors are world-space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicsOutput {
    pub forces: Vec<Force>,
    pub moments: Vec<Moment>,
    pub net_force: Vector3<f64>,
    pub net_moment: Vector3<f64>,
    /// New rigid-body mass, to be assigned rather than added.
    pub mass: f64,
}

impl DynamicsOutput {
    pub fn new(mass: f64) -> Self {
        Self {
            forces: Vec::new(),
            moments: Vec::new(),
            net_force: Vector3::zeros(),
            net_moment: Vector3::zeros(),
            mass,
        }
    }

    fn add_force(&mut self, vector: Vector3<f64>, category: ForceCategory) {
        self.net_force += vector;
        self.forces.push(Force::new(vector, category));
    }

    fn add_moment(&mut self, vector: Vector3<f64>, category: ForceCategory) {
        self.net_moment += vector;
        self.moments.push(Moment::new(vector, category));
    }

    /// Sum of all forces of one category (zero if none were emitted).
    pub fn force(&self, category: ForceCategory) -> Vector3<f64> {
        self.forces
            .iter()
            .filter(|f| f.category == category)
            .fold(Vector3::zeros(), |acc, f| acc + f.vector)
    }

    /// Sum of all moments of one category (zero if none were emitted).
    pub fn moment(&self, category: ForceCategory) -> Vector3<f64> {
        self.moments
            .iter()
            .filter(|m| m.category == category)
            .fold(Vector3::zeros(), |acc, m| acc + m.vector)
    }

    pub fn has_force(&self, category: ForceCategory) -> bool {
        self.forces.iter().any(|f| f.category == category)
    }
}

/// Per-aircraft flight model: turns kinematics and throttle into forces,
/// torques and a new mass once per fixed step.
///
/// Owns the only state that survives between ticks: the stall machine, the
/// fuel tank and the simulation clock used to drive turbulence.
#[derive(Component)]
pub struct AircraftDynamicsModel {
    config: AircraftConfig,
    curves: AeroCurveTable,
    environment: EnvironmentModel,
    stall: StallStateMachine,
    fuel: FuelSystem,
    random: Box<dyn RandomSource>,
    flight_state: FlightState,
    telemetry: Telemetry,
    sim_time: f64,
}

impl AircraftDynamicsModel {
    /// Production model: entropy-seeded stall buffet, default Perlin turbulence.
    pub fn new(config: AircraftConfig) -> Result<Self, ConfigError> {
        Self::with_sources(
            config,
            Box::new(RngSource::from_entropy()),
            Box::new(PerlinNoise::default()),
        )
    }

    /// Fully reproducible model. Stall and turbulence get independent seeds
    /// derived from `seed`.
    pub fn seeded(config: AircraftConfig, seed: u64) -> Result<Self, ConfigError> {
        let rng_manager = RngManager::new(seed);
        // Perlin seeds are 32 bit
        let noise_seed = rng_manager.component_seed("turbulence") as u32;
        Self::with_sources(
            config,
            Box::new(RngSource::new(rng_manager.get_rng("stall"))),
            Box::new(PerlinNoise::new(noise_seed)),
        )
    }

    pub fn with_sources(
        config: AircraftConfig,
        random: Box<dyn RandomSource>,
        noise: Box<dyn NoiseSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let curves = AeroCurveTable::from_config(&config.aero)?;
        let environment = EnvironmentModel::with_noise(&config.environment, noise);
        let stall = StallStateMachine::new(config.aero.stall_angle);
        let fuel = FuelSystem::new(&config.mass);
        let telemetry = Telemetry {
            fuel_left: fuel.remaining(),
            ..Default::default()
        };

        Ok(Self {
            config,
            curves,
            environment,
            stall,
            fuel,
            random,
            flight_state: FlightState::default(),
            telemetry,
            sim_time: 0.0,
        })
    }

    /// Start with `fuel` units instead of full tanks.
    pub fn with_initial_fuel(mut self, fuel: f64) -> Self {
        self.fuel = FuelSystem::with_fuel(&self.config.mass, fuel);
        self.telemetry.fuel_left = self.fuel.remaining();
        self
    }

    /// Advance the model by one fixed step.
    ///
    /// # Arguments
    /// * `spatial` - Body kinematics at the start of the step.
    /// * `mass` - Current rigid-body mass as held by the host.
    /// * `throttle` - Engine command for this step.
    /// * `dt` - Fixed timestep (s).
    pub fn tick(
        &mut self,
        spatial: &SpatialComponent,
        mass: f64,
        throttle: ThrottleCommand,
        dt: f64,
    ) -> DynamicsOutput {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            warn!("Invalid timestep {}, treating as zero", dt);
            0.0
        };
        let mass = if mass.is_finite() && mass > 0.0 {
            mass
        } else {
            let fallback = self.fuel.current_mass();
            warn!("Host passed mass {}, using {} kg", mass, fallback);
            fallback
        };

        let state = calculate_flight_state(spatial, &self.environment);
        self.stall.update(state.angle_of_attack, dt);

        let mut output = DynamicsOutput::new(mass);

        if state.has_airflow() {
            let (lift_factor, drag_factor) = self.stall.coefficient_factors();
            let coefficients = AeroCoefficients::new(
                self.curves.lift_coefficient(state.angle_of_attack),
                self.curves.drag_coefficient(state.angle_of_attack),
            )
            .scaled(lift_factor, drag_factor);

            let aero = calculate_lift_drag(
                &state,
                &spatial.right(),
                self.config.geometry.wing_area,
                coefficients,
            );
            if let Some(lift) = aero.lift {
                output.add_force(lift, ForceCategory::Lift);
            }
            if let Some(drag) = aero.drag {
                output.add_force(drag, ForceCategory::Drag);
            }
        }

        if let Some(thrust) = calculate_thrust(
            &self.config.propulsion,
            throttle,
            state.altitude,
            self.fuel.remaining(),
            &spatial.forward(),
        ) {
            output.add_force(thrust, ForceCategory::Thrust);
        }

        output.add_force(self.environment.wind_force(mass), ForceCategory::Wind);

        if state.has_airflow() {
            let turbulence = self
                .environment
                .turbulence_force(state.airspeed, self.sim_time);
            output.add_force(turbulence, ForceCategory::Turbulence);
        }

        if let Some(buffet) = self.stall.disturbance(
            self.random.as_mut(),
            mass,
            self.environment.turbulence_power(),
        ) {
            output.add_force(buffet.force, ForceCategory::StallDisturbance);
            output.add_moment(buffet.torque, ForceCategory::StallDisturbance);
        }

        self.fuel.consume(throttle.level(), dt);
        output.mass = self.fuel.current_mass();

        self.sim_time += dt;
        self.telemetry = Telemetry {
            airspeed: state.airspeed,
            altitude: state.altitude,
            angle_of_attack: state.angle_of_attack,
            fuel_left: self.fuel.remaining(),
            is_stalled: self.stall.is_stalled(),
        };
        self.flight_state = state;

        debug!(
            "t={:.2}s V={:.1} AoA={:.1} stalled={} F={:?} m={:.1}",
            self.sim_time,
            self.telemetry.airspeed,
            self.telemetry.angle_of_attack,
            self.telemetry.is_stalled,
            output.net_force,
            output.mass
        );

        output
    }

    pub fn airspeed(&self) -> f64 {
        self.telemetry.airspeed
    }

    pub fn altitude(&self) -> f64 {
        self.telemetry.altitude
    }

    pub fn angle_of_attack(&self) -> f64 {
        self.telemetry.angle_of_attack
    }

    pub fn fuel_left(&self) -> f64 {
        self.telemetry.fuel_left
    }

    pub fn is_stalled(&self) -> bool {
        self.telemetry.is_stalled
    }

    /// Snapshot of the last completed tick.
    pub fn telemetry(&self) -> Telemetry {
        self.telemetry
    }

    pub fn flight_state(&self) -> &FlightState {
        &self.flight_state
    }

    pub fn stall_status(&self) -> StallStatus {
        self.stall.status()
    }

    pub fn current_mass(&self) -> f64 {
        self.fuel.current_mass()
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn config(&self) -> &AircraftConfig {
        &self.config
    }

    pub fn environment(&self) -> &EnvironmentModel {
        &self.environment
    }
}
