//! Remote provider boundary: trait plus the structured failure it raises.

use async_trait::async_trait;
use thiserror::Error;

/// Structured failure surfaced by a remote generate call.
///
/// Built by the transport adapter at the remote boundary; consumed by the
/// pure classifier. No attribute sniffing on opaque errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFailure {
    /// HTTP status code, when the failure carried one.
    pub status: Option<u16>,
    /// Structured API status code (e.g. `PERMISSION_DENIED`), when present.
    pub code: Option<String>,
    /// Human-readable failure message.
    pub message: String,
}

/// Errors raised by a remote provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The remote API answered with a failure.
    #[error("remote API error: {}", .0.message)]
    Api(RemoteFailure),
    /// The request never completed at the transport level (connect, timeout,
    /// body read).
    #[error("transport error: {0}")]
    Transport(String),
}

/// Remote generate call with search augmentation enabled.
#[async_trait]
pub trait GenerateProvider: Send + Sync {
    /// Ask the remote model; `Ok(None)` means the call succeeded but carried
    /// no usable text. `temperature` is forwarded unvalidated; the remote
    /// contract governs acceptance.
    async fn generate_with_search(
        &self,
        model: &str,
        question: &str,
        temperature: f32,
    ) -> Result<Option<String>, ProviderError>;
}
