use bevy::log::info;
use serde::{Deserialize, Serialize};

use crate::components::{FuelState, MassConfig};
use crate::utils::FUEL_BURN_RATE;

/// Fuel tank driving the aircraft's total mass. Fuel only ever goes down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelSystem {
    state: FuelState,
    mass: MassConfig,
}

impl FuelSystem {
    /// Full tanks.
    pub fn new(config: &MassConfig) -> Self {
        Self::with_fuel(config, config.fuel_capacity)
    }

    /// Tanks holding `fuel` units, clamped to `[0, capacity]`.
    pub fn with_fuel(config: &MassConfig, fuel: f64) -> Self {
        let remaining = if fuel.is_finite() {
            fuel.clamp(0.0, config.fuel_capacity)
        } else {
            0.0
        };
        Self {
            state: FuelState { remaining },
            mass: config.clone(),
        }
    }

    /// Burn `throttle · 2 · dt` units. Returns the amount actually burned.
    pub fn consume(&mut self, throttle: f64, dt: f64) -> f64 {
        if throttle <= 0.0 || self.is_empty() {
            return 0.0;
        }
        let before = self.state.remaining;
        self.state.remaining =
            (before - throttle * FUEL_BURN_RATE * dt).clamp(0.0, self.mass.fuel_capacity);

        if self.state.remaining == 0.0 {
            info!("Fuel exhausted");
        }
        before - self.state.remaining
    }

    /// `empty_weight + remaining · fuel_density`
    pub fn current_mass(&self) -> f64 {
        self.mass.mass_with_fuel(self.state.remaining)
    }

    pub fn remaining(&self) -> f64 {
        self.state.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.state.remaining <= 0.0
    }
}
