//! Time-of-day parsing and minute-range normalization.
//!
//! Times are entered as `HH:MM` strings and converted to minute-of-day
//! integers. A range whose end is earlier than its start is treated as
//! crossing midnight: the end is shifted by 24 hours, so a normalized end
//! may exceed 1440.

use serde::{Deserialize, Serialize};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses an `H:MM`/`HH:MM` time of day into minutes since midnight.
///
/// Hours must be 0–23 and minutes 00–59 (two digits). Anything else —
/// empty input, missing colon, out-of-range components — yields `None`,
/// which callers treat as "no time entered", not as an error.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::parse_time_of_day;
///
/// assert_eq!(parse_time_of_day("08:30"), Some(510));
/// assert_eq!(parse_time_of_day("8:30"), Some(510));
/// assert_eq!(parse_time_of_day("23:59"), Some(1439));
/// assert_eq!(parse_time_of_day("24:00"), None);
/// assert_eq!(parse_time_of_day("8:5"), None);
/// assert_eq!(parse_time_of_day(""), None);
/// ```
pub fn parse_time_of_day(s: &str) -> Option<i64> {
    let (hh, mm) = s.trim().split_once(':')?;
    if hh.is_empty() || hh.len() > 2 || mm.len() != 2 {
        return None;
    }
    if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: i64 = hh.parse().ok()?;
    let minute: i64 = mm.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}

/// A normalized `[start, end]` minute-of-day interval.
///
/// `end` may exceed [`MINUTES_PER_DAY`] when the interval crosses
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteRange {
    /// Start, minutes since midnight.
    pub start: i64,
    /// End, minutes since midnight; `>= start` after normalization.
    pub end: i64,
}

impl MinuteRange {
    /// Length of the interval in minutes, never negative.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).max(0)
    }
}

/// Normalizes a pair of `HH:MM` strings into a [`MinuteRange`].
///
/// Returns `None` when either side fails to parse. When the end is
/// earlier than the start, the range is assumed to cross midnight and the
/// end is shifted by 24 hours.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::{normalize_range, MinuteRange};
///
/// assert_eq!(
///     normalize_range(Some("08:00"), Some("17:00")),
///     Some(MinuteRange { start: 480, end: 1020 })
/// );
/// // Night shift: 20:00 to 05:00 crosses midnight.
/// assert_eq!(
///     normalize_range(Some("20:00"), Some("05:00")),
///     Some(MinuteRange { start: 1200, end: 1740 })
/// );
/// assert_eq!(normalize_range(Some("20:00"), None), None);
/// ```
pub fn normalize_range(start: Option<&str>, end: Option<&str>) -> Option<MinuteRange> {
    let start = parse_time_of_day(start?)?;
    let mut end = parse_time_of_day(end?)?;
    if end < start {
        end += MINUTES_PER_DAY;
    }
    Some(MinuteRange { start, end })
}

/// Duration of an optional range in minutes; 0 when the range is absent.
pub fn duration(range: Option<&MinuteRange>) -> i64 {
    range.map_or(0, MinuteRange::duration_minutes)
}
