//! Building offset-carrying instants for the calculations.
//!
//! Every calculation reads its UTC offset from the instant it is given. These
//! helpers attach that offset once, either from an explicit value or from the
//! host time zone as it applies to that particular wall time.

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeZone};
use log::debug;

use crate::error::{Error, Result};

pub fn with_fixed_offset<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<FixedOffset> {
    dt.with_timezone(&dt.offset().fix())
}

/// Attaches an explicit UTC offset, in minutes east of Greenwich, to a wall time.
pub fn fixed_instant(naive: NaiveDateTime, utc_offset_minutes: i32) -> Result<DateTime<FixedOffset>> {
    let offset = utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(Error::InvalidUtcOffset {
            minutes: utc_offset_minutes,
        })?;
    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or(Error::DateOutOfRange)
}

/// Resolves a wall time through `tz`.
///
/// In a DST overlap the earlier of the two instants is used, whichever order
/// the zone reports them in.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Result<DateTime<FixedOffset>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(with_fixed_offset(&dt)),
        LocalResult::Ambiguous(a, b) => {
            let earlier = if a <= b { a } else { b };
            debug!("{naive} is ambiguous, using {}", with_fixed_offset(&earlier));
            Ok(with_fixed_offset(&earlier))
        }
        LocalResult::None => Err(Error::NonexistentLocalTime { datetime: naive }),
    }
}

/// Resolves a wall time through the host time zone.
///
/// The offset is the one in force at `naive`, not the one in force now.
pub fn local_instant(naive: NaiveDateTime) -> Result<DateTime<FixedOffset>> {
    resolve_local(&Local, naive)
}

/// The current time with the host's current offset.
pub fn now_local() -> DateTime<FixedOffset> {
    with_fixed_offset(&Local::now())
}
