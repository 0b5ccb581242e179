//! Integration test suite.
//!
//! 1. Store round trips and lifecycle
//! 2. Layout properties
//! 3. Full system smoke tests

pub mod helpers;
pub mod layout_properties;
pub mod system_smoke_tests;
