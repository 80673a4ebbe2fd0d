//! Time source for the timed throttle policy.

use std::time::{SystemTime, UNIX_EPOCH};

/// Provides the current time as milliseconds since the Unix epoch.
///
/// Injected so time-gated throttling can be tested with simulated clocks.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// System wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
