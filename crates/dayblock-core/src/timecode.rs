//! Wall-clock time codec and interval validation.
//!
//! Everything else in the library builds on these conversions:
//! - `HH:MM` strings <-> minutes-since-midnight <-> hour-of-day
//! - format validators that report `bool` and never fail
//! - half-open interval overlap on minute values

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Minutes in a day; valid minute values are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Split an `H:MM` / `HH:MM` string into raw hour/minute components.
///
/// Only checks the shape (1-2 digits, colon, exactly 2 digits); range
/// checking is the caller's job so format and range failures stay distinct.
fn split_time(s: &str) -> Option<(u32, u32)> {
    let (h, m) = s.split_once(':')?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return None;
    }
    if !h.bytes().all(|b| b.is_ascii_digit()) || !m.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((h.parse().ok()?, m.parse().ok()?))
}

/// Parse an `H:MM` / `HH:MM` string to minutes since midnight.
pub fn time_to_minutes(s: &str) -> Result<u32, TimeError> {
    let (hours, minutes) = split_time(s).ok_or_else(|| TimeError::Format(s.to_string()))?;
    if hours > 23 || minutes > 59 {
        return Err(TimeError::FieldRange {
            input: s.to_string(),
        });
    }
    Ok(hours * 60 + minutes)
}

/// Parse an `H:MM` / `HH:MM` string and return just the hour (0-23).
pub fn time_to_hour(s: &str) -> Result<u32, TimeError> {
    Ok(time_to_minutes(s)? / 60)
}

/// Format minutes since midnight as zero-padded `HH:MM`.
pub fn minutes_to_time(minutes: i64) -> Result<String, TimeError> {
    if !(0..MINUTES_PER_DAY as i64).contains(&minutes) {
        return Err(TimeError::MinutesRange(minutes));
    }
    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

/// Check whether a string is a valid 24-hour `H:MM` / `HH:MM` time.
///
/// Never fails; malformed input is simply `false`.
pub fn validate_time_format(s: &str) -> bool {
    matches!(split_time(s), Some((h, m)) if h <= 23 && m <= 59)
}

/// Check whether a string is an acceptable `YYYY-MM-DD` date.
///
/// Known quirk, preserved for compatibility: the day is only range-checked
/// to 1-31 with no days-in-month check, so `2024-02-31` passes (the original
/// rolls it into the next month), while month 0/13 and day 0/32 are
/// rejected. Callers needing calendar-exact dates parse with `NaiveDate`.
pub fn validate_date_format(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits = |r: std::ops::Range<usize>| bytes[r].iter().all(|b| b.is_ascii_digit());
    if !digits(0..4) || !digits(5..7) || !digits(8..10) {
        return false;
    }
    let month: u32 = s[5..7].parse().unwrap_or(0);
    let day: u32 = s[8..10].parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// Half-open interval overlap on minute values.
///
/// Adjacent intervals (`a_end == b_start`) do not overlap. Symmetric in its
/// two intervals, and any non-empty range overlaps itself.
pub fn times_overlap(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && a_end > b_start
}

/// A wall-clock time of day, stored as minutes since midnight (0-1439).
///
/// Serializes as its `HH:MM` string form; round-tripping through minutes
/// and back is lossless for every in-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Parse from an `H:MM` / `HH:MM` string.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        Ok(Self(time_to_minutes(s)? as u16))
    }

    /// Construct from minutes since midnight.
    pub fn from_minutes(minutes: u32) -> Result<Self, TimeError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeError::MinutesRange(minutes as i64));
        }
        Ok(Self(minutes as u16))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        self.0 as u32
    }

    /// Hour of day (0-23).
    pub fn hour(self) -> u32 {
        self.0 as u32 / 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_minutes() {
        assert_eq!(time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(time_to_minutes("9:30").unwrap(), 570);
        assert_eq!(time_to_minutes("09:30").unwrap(), 570);
        assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_time_to_minutes_format_errors() {
        for bad in ["", "9", "9:5", "930", "09:30:00", "ab:cd", "9:3a", ":30", "123:00"] {
            assert!(
                matches!(time_to_minutes(bad), Err(TimeError::Format(_))),
                "expected format error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_time_to_minutes_range_errors() {
        for bad in ["24:00", "25:30", "12:60", "99:99"] {
            assert!(
                matches!(time_to_minutes(bad), Err(TimeError::FieldRange { .. })),
                "expected range error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_time_to_hour() {
        assert_eq!(time_to_hour("9:59").unwrap(), 9);
        assert_eq!(time_to_hour("23:00").unwrap(), 23);
    }

    #[test]
    fn test_minutes_to_time() {
        assert_eq!(minutes_to_time(0).unwrap(), "00:00");
        assert_eq!(minutes_to_time(570).unwrap(), "09:30");
        assert_eq!(minutes_to_time(1439).unwrap(), "23:59");
        assert!(minutes_to_time(-1).is_err());
        assert!(minutes_to_time(1440).is_err());
    }

    #[test]
    fn test_validate_time_format() {
        assert!(validate_time_format("0:00"));
        assert!(validate_time_format("23:59"));
        assert!(!validate_time_format("24:00"));
        assert!(!validate_time_format("12:60"));
        assert!(!validate_time_format("12-30"));
        assert!(!validate_time_format(""));
    }

    #[test]
    fn test_validate_date_format() {
        assert!(validate_date_format("2024-01-15"));
        assert!(validate_date_format("2024-12-31"));
        // Preserved leniency: day overflow within 1-31 is accepted
        assert!(validate_date_format("2024-02-31"));
        assert!(validate_date_format("2024-04-31"));
        // Impossible components are rejected
        assert!(!validate_date_format("2024-00-15"));
        assert!(!validate_date_format("2024-13-01"));
        assert!(!validate_date_format("2024-01-00"));
        assert!(!validate_date_format("2024-01-32"));
        assert!(!validate_date_format("2024/01/15"));
        assert!(!validate_date_format("24-01-15"));
        assert!(!validate_date_format("2024-1-15"));
    }

    #[test]
    fn test_times_overlap() {
        // Adjacent intervals do not overlap
        assert!(!times_overlap(600, 660, 660, 720));
        assert!(!times_overlap(660, 720, 600, 660));
        // Containment overlaps
        assert!(times_overlap(540, 720, 600, 660));
        // A range overlaps itself
        assert!(times_overlap(600, 660, 600, 660));
        // Disjoint
        assert!(!times_overlap(0, 60, 120, 180));
    }

    #[test]
    fn test_time_of_day_display() {
        let t = TimeOfDay::parse("7:05").unwrap();
        assert_eq!(t.to_string(), "07:05");
        assert_eq!(t.minutes(), 425);
        assert_eq!(t.hour(), 7);
    }

    #[test]
    fn test_time_of_day_serde() {
        let t = TimeOfDay::parse("18:45").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"18:45\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn round_trip_minutes(m in 0i64..1440) {
                let s = minutes_to_time(m).unwrap();
                prop_assert_eq!(time_to_minutes(&s).unwrap() as i64, m);
            }

            #[test]
            fn round_trip_strings(h in 0u32..24, m in 0u32..60) {
                let s = format!("{h:02}:{m:02}");
                let minutes = time_to_minutes(&s).unwrap();
                prop_assert_eq!(minutes_to_time(minutes as i64).unwrap(), s);
            }

            #[test]
            fn overlap_symmetry(a in 0u32..1440, b in 0u32..1440, c in 0u32..1440, d in 0u32..1440) {
                prop_assert_eq!(times_overlap(a, b, c, d), times_overlap(c, d, a, b));
            }
        }
    }
}
