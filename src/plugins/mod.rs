mod dynamics;

pub use dynamics::{aircraft_bundle, spawn_aircraft, FlightDynamicsPlugin, FlightDynamicsSet};
