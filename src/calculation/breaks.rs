//! Break-interval normalization and overlap arithmetic.
//!
//! Break entries are parsed with the same cross-midnight rule as work
//! ranges, zero-length and unparseable entries are dropped, and the
//! remainder is merged into a sorted set of disjoint intervals. The merged
//! set is computed once per record and reused against both the work and
//! the OT window.

use crate::models::BreakSpec;

use super::time_of_day::{MINUTES_PER_DAY, MinuteRange, parse_time_of_day};

/// Parses and normalizes break entries into disjoint minute intervals.
///
/// Entries whose start or end fails to parse are discarded, as are
/// zero-length entries. An end earlier than its start is shifted by 24
/// hours (cross-midnight break). Overlapping or touching intervals are
/// merged.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::normalize_breaks;
/// use ot_engine::models::BreakSpec;
///
/// let breaks = vec![
///     BreakSpec::new("12:00", "12:30"),
///     BreakSpec::new("12:30", "13:00"), // touching: merged
///     BreakSpec::new("xx", "13:00"),    // unparseable: dropped
/// ];
/// let merged = normalize_breaks(&breaks);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].start, 720);
/// assert_eq!(merged[0].end, 780);
/// ```
pub fn normalize_breaks(breaks: &[BreakSpec]) -> Vec<MinuteRange> {
    let mut intervals = Vec::with_capacity(breaks.len());
    for spec in breaks {
        let Some(start) = spec.start.as_deref().and_then(parse_time_of_day) else {
            continue;
        };
        let Some(mut end) = spec.end.as_deref().and_then(parse_time_of_day) else {
            continue;
        };
        if end < start {
            end += MINUTES_PER_DAY;
        }
        if end == start {
            continue;
        }
        intervals.push(MinuteRange { start, end });
    }
    merge_intervals(intervals)
}

/// Merges a set of minute intervals into sorted, disjoint intervals.
///
/// Intervals are sorted by start then end; an interval that overlaps or
/// touches the previous one extends it.
pub fn merge_intervals(mut intervals: Vec<MinuteRange>) -> Vec<MinuteRange> {
    intervals.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

    let mut merged: Vec<MinuteRange> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval.start <= last.end => {
                last.end = last.end.max(interval.end);
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Total minutes of overlap between a set of intervals and a range.
///
/// The intervals must already be normalized/merged. Returns 0 for an
/// absent range; the result never exceeds the range's duration when the
/// intervals are disjoint.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::{normalize_breaks, overlap_minutes, MinuteRange};
/// use ot_engine::models::BreakSpec;
///
/// let breaks = normalize_breaks(&[BreakSpec::new("12:00", "13:00")]);
/// let work = MinuteRange { start: 480, end: 1020 }; // 08:00-17:00
/// assert_eq!(overlap_minutes(&breaks, Some(&work)), 60);
/// assert_eq!(overlap_minutes(&breaks, None), 0);
/// ```
pub fn overlap_minutes(intervals: &[MinuteRange], range: Option<&MinuteRange>) -> i64 {
    let Some(range) = range else {
        return 0;
    };
    intervals
        .iter()
        .map(|iv| {
            let lo = iv.start.max(range.start);
            let hi = iv.end.min(range.end);
            (hi - lo).max(0)
        })
        .sum()
}
