//! Cooldown window arithmetic tests.

use meridian_core::{remaining_wait, COOLDOWN_WINDOW_SECS};
use pretty_assertions::assert_eq;

/// No recorded usage means no wait.
#[test]
fn absent_timestamp_permits_call() {
    assert_eq!(remaining_wait(None, 1_000.0), None);
}

/// An elapsed window permits the call, including the exact boundary.
#[test]
fn expired_window_permits_call() {
    assert_eq!(remaining_wait(Some(1_000.0), 1_060.0), None);
    assert_eq!(remaining_wait(Some(1_000.0), 1_061.5), None);
    assert_eq!(remaining_wait(Some(1_000.0), 2_000.0), None);
}

/// Inside the window the wait rounds up, never down.
#[test]
fn wait_rounds_up() {
    // 5 seconds elapsed -> 55 remaining.
    assert_eq!(remaining_wait(Some(1_000.0), 1_005.0), Some(55));
    // 59.5 elapsed -> 0.5 remaining, reported as 1.
    assert_eq!(remaining_wait(Some(1_000.0), 1_059.5), Some(1));
    // Just under the boundary still blocks.
    assert_eq!(remaining_wait(Some(1_000.0), 1_059.999), Some(1));
    // Barely elapsed -> full window.
    assert_eq!(remaining_wait(Some(1_000.0), 1_000.25), Some(60));
}

/// Ceiling property: for elapsed < 60 the reported wait r satisfies
/// 60 - elapsed <= r < 60 - elapsed + 1.
#[test]
fn ceiling_property_holds_across_samples() {
    let now = 10_000.0;
    for tenths in 0..600 {
        let elapsed = f64::from(tenths) / 10.0;
        let wait = remaining_wait(Some(now - elapsed), now).expect("blocked") as f64;
        let exact = COOLDOWN_WINDOW_SECS - elapsed;
        assert!(
            wait >= exact && wait < exact + 1.0,
            "elapsed={elapsed}: wait {wait} outside [{exact}, {})",
            exact + 1.0
        );
        assert!(wait >= 1.0, "elapsed={elapsed}: wait must be positive");
    }
}

/// A timestamp in the future reports a longer wait instead of failing.
#[test]
fn future_timestamp_blocks() {
    assert_eq!(remaining_wait(Some(1_010.0), 1_000.0), Some(70));
}
