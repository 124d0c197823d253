//! Test helpers shared across meridian crates.

pub mod provider;

pub use provider::{EmptyProvider, FailingProvider, FixedProvider, RecordingProvider, SeenCall};
