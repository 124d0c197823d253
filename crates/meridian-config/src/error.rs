//! Error types for store loading and persistence.

use thiserror::Error;

/// Errors returned while loading or persisting the durable store.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the store file failed.
    #[error("failed to read store: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// The store file exists but is not valid JSON.
    #[error("failed to parse store: {0}")]
    ParseFailed(#[from] serde_json::Error),
    /// No credential could be resolved from any source.
    #[error("no API key configured: set it in the store file, pass --api-key, or export GEMINI_API_KEY")]
    MissingCredential,
}
