pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const DENSITY_SCALE_HEIGHT: f64 = 8000.0; // m, exponential atmosphere

// Air data
pub const MIN_AIRSPEED_THRESHOLD: f64 = 0.1; // m/s, below this no aero forces are produced
pub const MIN_DIRECTION_NORM: f64 = 1e-9; // guard for normalising force directions

// Stall behaviour
pub const STALL_RECOVERY_FRACTION: f64 = 0.7; // exit threshold as a fraction of the stall angle
pub const STALL_MIN_DWELL: f64 = 2.0; // s, minimum time stalled before recovery
pub const STALL_BUFFET_DURATION: f64 = 3.0; // s, disturbance window after stall entry
pub const STALL_LIFT_FACTOR: f64 = 0.3;
pub const STALL_DRAG_FACTOR: f64 = 2.0;
pub const STALL_BUFFET_FORCE_GAIN: f64 = 2.0; // multiplied by turbulence power and mass
pub const STALL_BUFFET_TORQUE: f64 = 0.1; // N·m

// Propulsion and environment
pub const FUEL_BURN_RATE: f64 = 2.0; // fuel units per second at full throttle
pub const WIND_DRIFT_FACTOR: f64 = 0.1; // fraction of wind velocity times mass

// Throttle levels driven by the boost flag
pub const BOOST_THROTTLE: f64 = 1.0;
pub const CRUISE_THROTTLE: f64 = 0.5;
