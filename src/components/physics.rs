use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::physics::DynamicsOutput;

/// Rigid-body mass and the per-tick force/moment accumulator handed to the
/// host integrator. All vectors are world-space.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub mass: f64,
    pub net_force: Vector3<f64>,
    pub net_moment: Vector3<f64>,
    pub forces: Vec<Force>,
    pub moments: Vec<Moment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    pub vector: Vector3<f64>,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceCategory {
    Lift,
    Drag,
    Thrust,
    Wind,
    Turbulence,
    StallDisturbance,
}

impl Force {
    pub fn new(vector: Vector3<f64>, category: ForceCategory) -> Self {
        Self { vector, category }
    }
}

impl Moment {
    pub fn new(vector: Vector3<f64>, category: ForceCategory) -> Self {
        Self { vector, category }
    }
}

impl PhysicsComponent {
    pub fn new(mass: f64) -> Self {
        Self {
            mass,
            net_force: Vector3::zeros(),
            net_moment: Vector3::zeros(),
            forces: Vec::new(),
            moments: Vec::new(),
        }
    }

    pub fn add_force(&mut self, force: Force) {
        self.net_force += force.vector;
        self.forces.push(force);
    }

    pub fn add_moment(&mut self, moment: Moment) {
        self.net_moment += moment.vector;
        self.moments.push(moment);
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
        self.moments.clear();
        self.net_force = Vector3::zeros();
        self.net_moment = Vector3::zeros();
    }

    /// Accumulate one tick of model output. Forces and moments are additive,
    /// mass is assigned.
    pub fn apply(&mut self, output: &DynamicsOutput) {
        for force in &output.forces {
            self.add_force(force.clone());
        }
        for moment in &output.moments {
            self.add_moment(moment.clone());
        }
        self.mass = output.mass;
    }
}

impl Default for PhysicsComponent {
    fn default() -> Self {
        Self::new(1.0)
    }
}
