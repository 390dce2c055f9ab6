use chrono::{DateTime, Utc};

/// Wall clock, injectable so debounce logic is testable without sleeping.
pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;

    fn now_utc(&self) -> DateTime<Utc>;
}
