//! Error types for instant construction and event-time decomposition.
//!
//! The angle functions never return errors: a domain violation in `asin` or
//! `acos` yields NaN and propagates to the caller.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The event time is NaN or infinite, typically because the sun never
    /// crosses the horizon at this latitude and date.
    #[error("clock minutes {minutes} are not finite, event is undefined for this date and latitude")]
    NonFiniteClockMinutes { minutes: f64 },

    /// Rolling a clock-minute value onto its date left chrono's supported range.
    #[error("date arithmetic left the supported calendar range")]
    DateOutOfRange,

    #[error("UTC offset of {minutes} minutes is out of range (must be within ±24 hours)")]
    InvalidUtcOffset { minutes: i32 },

    /// The host time zone skips this wall-clock time (e.g. a DST gap).
    #[error("local time {datetime} does not exist in the host time zone")]
    NonexistentLocalTime { datetime: NaiveDateTime },
}
