//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;

/// Base URL used throughout the unit tests.
pub const TEST_BASE_URL: &str = "https://cars.example.com/";

/// Creates a test App with a fixed base URL.
pub fn test_app() -> App {
    App::new(TEST_BASE_URL.to_string())
}
