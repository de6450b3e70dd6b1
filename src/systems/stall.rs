use bevy::log::info;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::StallStatus;
use crate::physics::RandomSource;
use crate::utils::{
    STALL_BUFFET_DURATION, STALL_BUFFET_FORCE_GAIN, STALL_BUFFET_TORQUE, STALL_DRAG_FACTOR,
    STALL_LIFT_FACTOR, STALL_MIN_DWELL, STALL_RECOVERY_FRACTION,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StallPhase {
    Flying,
    Stalled,
}

impl fmt::Display for StallPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StallPhase::Flying => write!(f, "Flying"),
            StallPhase::Stalled => write!(f, "Stalled"),
        }
    }
}

/// Outcome of one [`StallStateMachine::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StallTransition {
    Unchanged,
    Entered,
    Recovered,
}

/// Random buffet applied while a stall is young.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StallDisturbance {
    pub force: Vector3<f64>,
    pub torque: Vector3<f64>,
}

/// Stall detection with hysteresis.
///
/// Enters at `|α| > stall_angle`. Leaves only once `|α|` has dropped below
/// `0.7 · stall_angle` and the stall has lasted more than two seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StallStateMachine {
    status: StallStatus,
    stall_angle: f64,
}

impl StallStateMachine {
    pub fn new(stall_angle: f64) -> Self {
        Self {
            status: StallStatus::default(),
            stall_angle,
        }
    }

    pub fn status(&self) -> StallStatus {
        self.status
    }

    pub fn phase(&self) -> StallPhase {
        if self.status.in_stall {
            StallPhase::Stalled
        } else {
            StallPhase::Flying
        }
    }

    pub fn is_stalled(&self) -> bool {
        self.status.in_stall
    }

    pub fn time_in_stall(&self) -> f64 {
        self.status.time_in_stall
    }

    pub fn stall_angle(&self) -> f64 {
        self.stall_angle
    }

    /// Advance the machine by `dt` at angle of attack `aoa` (degrees).
    ///
    /// The stall timer restarts at zero on entry and is advanced in the same
    /// call, so the recovery check always sees the time including this tick.
    pub fn update(&mut self, aoa: f64, dt: f64) -> StallTransition {
        let magnitude = aoa.abs();
        let mut transition = StallTransition::Unchanged;

        if !self.status.in_stall && magnitude > self.stall_angle {
            self.status.in_stall = true;
            self.status.time_in_stall = 0.0;
            transition = StallTransition::Entered;
            info!(
                "{} -> {} at AoA {:.1} deg (limit {:.1})",
                StallPhase::Flying,
                StallPhase::Stalled,
                aoa,
                self.stall_angle
            );
        }

        if self.status.in_stall {
            self.status.time_in_stall += dt;

            if transition == StallTransition::Unchanged
                && magnitude < self.stall_angle * STALL_RECOVERY_FRACTION
                && self.status.time_in_stall > STALL_MIN_DWELL
            {
                info!(
                    "{} -> {} after {:.2}s at AoA {:.1} deg",
                    StallPhase::Stalled,
                    StallPhase::Flying,
                    self.status.time_in_stall,
                    aoa
                );
                self.status = StallStatus::default();
                transition = StallTransition::Recovered;
            }
        }

        transition
    }

    /// Multipliers `(lift, drag)` for this tick's coefficients.
    pub fn coefficient_factors(&self) -> (f64, f64) {
        if self.status.in_stall {
            (STALL_LIFT_FACTOR, STALL_DRAG_FACTOR)
        } else {
            (1.0, 1.0)
        }
    }

    /// True during the buffet window at the start of a stall.
    pub fn is_buffeting(&self) -> bool {
        self.status.in_stall && self.status.time_in_stall < STALL_BUFFET_DURATION
    }

    /// Draw this tick's buffet, or `None` outside the buffet window.
    pub fn disturbance(
        &self,
        random: &mut dyn RandomSource,
        mass: f64,
        turbulence_power: f64,
    ) -> Option<StallDisturbance> {
        if !self.is_buffeting() {
            return None;
        }
        let force =
            random.inside_unit_sphere() * turbulence_power * STALL_BUFFET_FORCE_GAIN * mass;
        let torque = random.inside_unit_sphere() * STALL_BUFFET_TORQUE;
        Some(StallDisturbance { force, torque })
    }
}
