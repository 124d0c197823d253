//! Cooldown window arithmetic over the persisted usage timestamp.

/// Minimum spacing between successful remote calls, in seconds.
pub const COOLDOWN_WINDOW_SECS: f64 = 60.0;

/// Seconds the caller must still wait, or `None` when a call is permitted.
///
/// Rounds up so the reported wait is never optimistic: the caller is never
/// told to retry before the window truly closes. A `last_used` in the future
/// (clock skew, hand-edited store) simply reports a longer wait rather than
/// failing.
pub fn remaining_wait(last_used: Option<f64>, now: f64) -> Option<u64> {
    let last_used = last_used?;
    let elapsed = now - last_used;
    if elapsed >= COOLDOWN_WINDOW_SECS {
        return None;
    }
    Some((COOLDOWN_WINDOW_SECS - elapsed).ceil() as u64)
}
