//! Time-threshold filter for mechanical button edges.

use embassy_time::{Duration, Instant};

use crate::config::DEBOUNCE_INTERVAL;

/// Accepts an edge only if the previous accepted edge is at least
/// `min_interval` old. One gate per button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceGate {
    last_accepted: Option<Instant>,
    min_interval: Duration,
}

impl DebounceGate {
    pub const fn new(min_interval: Duration) -> Self {
        Self {
            last_accepted: None,
            min_interval,
        }
    }

    /// Filters an edge observed at `now`.
    ///
    /// The first edge ever seen is always accepted. A rejected edge leaves
    /// the gate untouched, so a burst of bounces cannot push the window
    /// forward. An edge timestamped before the last accepted one is rejected.
    pub fn accept(&mut self, now: Instant) -> bool {
        let stale = match self.last_accepted {
            None => true,
            Some(last) => now
                .checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= self.min_interval),
        };
        if stale {
            self.last_accepted = Some(now);
        }
        stale
    }

    pub const fn last_accepted(&self) -> Option<Instant> {
        self.last_accepted
    }

    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new(DEBOUNCE_INTERVAL)
    }
}
