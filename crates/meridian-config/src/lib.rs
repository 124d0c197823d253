//! Durable configuration and usage-state store.
//!
//! This crate owns the on-disk record (credential, model, prompt rule, last
//! successful call time) that survives across process invocations, plus the
//! bootstrap and best-effort persistence rules around it.

mod error;
mod model;
mod store;

/// Public error type returned by store loading and persistence APIs.
pub use error::ConfigError;
/// Persisted record schema and built-in defaults.
pub use model::{StoreOverrides, StoreRecord, DEFAULT_MODEL_NAME, DEFAULT_PROMPT_RULE};
/// Durable store handle.
pub use store::{ConfigStore, DEFAULT_STORE_FILE};
