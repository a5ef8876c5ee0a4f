//! Wall-clock <-> absolute time conversion for an IANA timezone.
//!
//! All DST-sensitive logic lives here: the offset is resolved at the
//! specific date being converted, never assumed fixed. Ambiguous local
//! times (fall-back hour) resolve to the earlier instant; nonexistent local
//! times (spring-forward gap) roll to the next valid instant.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::timecode::TimeOfDay;

/// Convert a local wall-clock time on a date to an absolute UTC instant.
pub fn wall_clock_to_absolute(date: NaiveDate, time: TimeOfDay, tz: Tz) -> DateTime<Utc> {
    // In range by the TimeOfDay invariant
    let naive_time = NaiveTime::from_num_seconds_from_midnight_opt(time.minutes() * 60, 0)
        .unwrap_or(NaiveTime::MIN);
    let ndt = date.and_time(naive_time);

    match tz.from_local_datetime(&ndt) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
        LocalResult::None => {
            // Spring-forward gap: this wall clock never occurs; the clock
            // jumped past it, so take the same wall clock one hour later.
            let shifted = ndt + Duration::hours(1);
            match tz.from_local_datetime(&shifted) {
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                    dt.with_timezone(&Utc)
                }
                LocalResult::None => Utc.from_utc_datetime(&ndt),
            }
        }
    }
}

/// Convert an absolute instant to local wall-clock minutes since midnight.
pub fn absolute_to_wall_clock(instant: DateTime<Utc>, tz: Tz) -> u32 {
    let local = instant.with_timezone(&tz);
    local.hour() * 60 + local.minute()
}
