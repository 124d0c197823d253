//! Mapping of remote API failures onto user-facing categories.

use crate::provider::RemoteFailure;
use crate::types::FailureCategory;

/// Classify a remote API failure. First match wins; substring checks are
/// case-insensitive on the message.
///
/// The substring lists are a compatibility contract with the remote
/// service's observed wording. Several credential clauses overlap; the
/// precedence and the full list are kept verbatim rather than simplified,
/// since the intent of every clause is not independently verifiable.
/// Transport-level failures must not be passed here (see
/// [`FailureCategory::Transport`]).
pub fn classify(failure: &RemoteFailure) -> FailureCategory {
    let message = failure.message.to_lowercase();
    let code = failure.code.as_deref();

    if failure.status == Some(429)
        || message.contains("429")
        || message.contains("resource_exhausted")
        || message.contains("quota")
        || message.contains("too many requests")
    {
        return FailureCategory::QuotaExceeded;
    }

    if failure.status == Some(403)
        || matches!(code, Some("PERMISSION_DENIED") | Some("UNAUTHENTICATED"))
        || message.contains("permission_denied")
        || message.contains("unauthenticated")
        || message.contains("forbidden")
        || message.contains("invalid api key")
        || message.contains("api key not valid")
        || message.contains("api key was reported")
        || (message.contains("leaked") && message.contains("api key"))
        || (message.contains("invalid key") && message.contains("api"))
        || (message.contains("unauthorized") && message.contains("api key"))
        || (message.contains("permission denied")
            && (message.contains("api key") || message.contains("key")))
    {
        return FailureCategory::InvalidCredential;
    }

    if failure.status == Some(400)
        || message.contains("400")
        || message.contains("bad request")
        || message.contains("invalid_argument")
    {
        return FailureCategory::BadRequest;
    }

    FailureCategory::Unclassified
}
