//! Request gating, failure classification, and call orchestration.
//!
//! This crate owns the cooldown gate over the durable store, the mapping of
//! remote failures onto user-facing categories, and the orchestrator that
//! composes both around an injected remote provider.

mod classify;
mod cooldown;
mod orchestrator;
mod provider;
mod types;

/// Pure failure classification.
pub use classify::classify;
/// Cooldown window arithmetic.
pub use cooldown::{remaining_wait, COOLDOWN_WINDOW_SECS};
/// Call orchestration around gate, provider, and store.
pub use orchestrator::{QueryOrchestrator, DEFAULT_TEMPERATURE};
/// Remote provider boundary.
pub use provider::{GenerateProvider, ProviderError, RemoteFailure};
/// Caller-facing outcome and failure types.
pub use types::{AskOutcome, ClassifiedFailure, FailureCategory};
