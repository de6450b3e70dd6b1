#![allow(dead_code)]

mod assertions;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{assert_mass_matches_fuel, assert_output_valid, assert_vector_eq};
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
