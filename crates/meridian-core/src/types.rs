//! Caller-facing outcome types for a single `ask` call.

use std::fmt;

/// Result of one `ask` call. Per-call failures are values, never panics or
/// propagated errors, so an interactive session survives them.
#[derive(Debug, Clone, PartialEq)]
pub enum AskOutcome {
    /// The remote call produced answer text.
    Answer(String),
    /// The cooldown window is still open; the remote call was not made.
    CooldownBlocked {
        /// Minimum whole seconds to wait before retrying.
        remaining_secs: u64,
    },
    /// The remote call returned without error but carried no usable text.
    NoAnswer,
    /// The remote call failed; the failure has been categorized.
    Failed(ClassifiedFailure),
}

/// A remote failure mapped onto a user-facing category, detail preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedFailure {
    /// The category the failure mapped to.
    pub category: FailureCategory,
    /// The original failure message, never discarded.
    pub message: String,
}

/// Fixed set of user-facing failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// Rate or usage quota exhausted (HTTP 429 family).
    QuotaExceeded,
    /// The credential was rejected (HTTP 403 family).
    InvalidCredential,
    /// The request itself was rejected (HTTP 400 family).
    BadRequest,
    /// A remote API failure matching no known pattern.
    Unclassified,
    /// A transport-level failure (connect, timeout, body read); never forced
    /// into the API categories.
    Transport,
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureCategory::QuotaExceeded => "quota exceeded",
            FailureCategory::InvalidCredential => "invalid API key",
            FailureCategory::BadRequest => "bad request",
            FailureCategory::Unclassified => "API error",
            FailureCategory::Transport => "transport error",
        };
        f.write_str(label)
    }
}
