//! Scripted drag-to-close scenarios.
//!
//! Each [`Scenario`] builds a fresh [`Card`], plays a gesture against it with
//! the deterministic capture engine and reports where the card ended up.

pub mod card;
pub mod host;
pub mod scenario;

pub use card::Card;
pub use host::DemoHost;
pub use scenario::{Outcome, Scenario, CARD_HEIGHT};

#[cfg(test)]
#[path = "tests/scenario_tests.rs"]
mod tests;
