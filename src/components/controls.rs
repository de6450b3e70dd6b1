use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{BOOST_THROTTLE, CRUISE_THROTTLE};

/// Pilot inputs captured by the host once per tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PilotInput {
    /// Boost key held
    pub boosting: bool,
}

/// Normalised engine power command in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrottleCommand(f64);

impl ThrottleCommand {
    /// Clamps `level` into `[0, 1]`; non-finite input is treated as idle.
    pub fn new(level: f64) -> Self {
        if level.is_finite() {
            Self(level.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// Two-level throttle: full power while boosting, half otherwise.
    pub fn from_boost(boosting: bool) -> Self {
        if boosting {
            Self(BOOST_THROTTLE)
        } else {
            Self(CRUISE_THROTTLE)
        }
    }

    pub fn idle() -> Self {
        Self(0.0)
    }

    pub fn level(&self) -> f64 {
        self.0
    }
}

impl Default for ThrottleCommand {
    fn default() -> Self {
        Self::from_boost(false)
    }
}

impl From<PilotInput> for ThrottleCommand {
    fn from(input: PilotInput) -> Self {
        Self::from_boost(input.boosting)
    }
}
