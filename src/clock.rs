use chrono::{SecondsFormat, Utc};
use std::time::Instant;

/// # Service Clock
///
/// Start instant of the process, captured once during startup before the
/// listener accepts any request. Shared with handlers through `web::Data`
/// and never mutated afterwards, so concurrent reads need no synchronization.
///
/// ## Lifecycle
/// - Created by [`ServiceClock::start`] in `main`, lives for the process
///   lifetime.
/// - Read by the health endpoint on every request to compute uptime.
#[derive(Clone, Copy, Debug)]
pub struct ServiceClock {
    started_at: Instant,
}

impl ServiceClock {
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Seconds elapsed since startup, as a float. Backed by a monotonic
    /// instant: non-negative, and strictly increasing for any two reads
    /// separated by real elapsed time.
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

/// Current UTC time as an ISO 8601 string with microsecond precision and a
/// literal trailing `Z`, e.g. `2024-01-01T12:00:00.123456Z`.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
