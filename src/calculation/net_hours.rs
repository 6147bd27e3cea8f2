//! Net work/OT hour computation per attendance rules.
//!
//! The attendance category drives everything:
//!
//! - `off`: all zeros, whatever the time fields say.
//! - `personal`/`sick`: the standard day's worth of work minutes from the
//!   settings, no OT; actual time fields are not consulted.
//! - `present` (and any unrecognized tag): durations of the work and OT
//!   windows minus overlapping break time, each clamped at zero. The two
//!   windows are independent — a break can overlap both, and the windows
//!   may themselves overlap in wall-clock time since OT is additional
//!   paid time.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::Settings;
use crate::models::{Attendance, DayRecord, NetHours};

use super::breaks::{normalize_breaks, overlap_minutes};
use super::time_of_day::normalize_range;

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts minutes to hours rounded to 2 decimals.
fn minutes_to_hours(minutes: i64) -> Decimal {
    round2(Decimal::from(minutes) / Decimal::from(60))
}

/// The standard-hours divisor with the fixed fallback of 8 for
/// non-positive configured values.
pub(crate) fn standard_hours_per_day(settings: &Settings) -> Decimal {
    if settings.standard_hours_per_day > Decimal::ZERO {
        settings.standard_hours_per_day
    } else {
        Decimal::from(8)
    }
}

/// Computes net work/OT minutes and hours for one record.
///
/// Missing or unparseable time fields make the affected window contribute
/// zero minutes; they are never an error. Cross-midnight windows
/// (`end < start`) are valid and expected for night shifts.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::compute_net_hours;
/// use ot_engine::config::Settings;
/// use ot_engine::models::{BreakSpec, DayRecord};
/// use rust_decimal::Decimal;
///
/// let settings = Settings::default();
/// let record = DayRecord {
///     date: "2026-02-03".to_string(),
///     work_start: Some("08:00".to_string()),
///     work_end: Some("17:00".to_string()),
///     ot_start: Some("17:00".to_string()),
///     ot_end: Some("20:00".to_string()),
///     breaks: vec![
///         BreakSpec::new("12:00", "13:00"),
///         BreakSpec::new("17:00", "17:30"),
///     ],
///     ..Default::default()
/// };
///
/// let hours = compute_net_hours(&record, &settings);
/// assert_eq!(hours.work_minutes_net, 480); // 9h window minus 1h break
/// assert_eq!(hours.ot_minutes_net, 150);   // 3h window minus 30m break
/// assert_eq!(hours.work_hours_net, Decimal::from(8));
/// assert_eq!(hours.ot_hours_net, Decimal::new(25, 1));
/// ```
pub fn compute_net_hours(record: &DayRecord, settings: &Settings) -> NetHours {
    match record.attendance {
        Attendance::Off => NetHours::zero(),
        Attendance::Personal | Attendance::Sick => {
            let standard_minutes = (standard_hours_per_day(settings) * Decimal::from(60))
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
                .unwrap_or(0)
                .max(0);
            NetHours {
                work_minutes_net: standard_minutes,
                ot_minutes_net: 0,
                total_minutes_net: standard_minutes,
                work_hours_net: minutes_to_hours(standard_minutes),
                ot_hours_net: Decimal::ZERO,
                total_hours_net: minutes_to_hours(standard_minutes),
            }
        }
        Attendance::Present => {
            let breaks = normalize_breaks(&record.breaks);
            let work_range =
                normalize_range(record.work_start.as_deref(), record.work_end.as_deref());
            let ot_range = normalize_range(record.ot_start.as_deref(), record.ot_end.as_deref());

            let work_minutes = work_range.map_or(0, |r| r.duration_minutes());
            let ot_minutes = ot_range.map_or(0, |r| r.duration_minutes());

            let work_overlap = overlap_minutes(&breaks, work_range.as_ref());
            let ot_overlap = overlap_minutes(&breaks, ot_range.as_ref());

            let work_minutes_net = (work_minutes - work_overlap).max(0);
            let ot_minutes_net = (ot_minutes - ot_overlap).max(0);
            let total_minutes_net = work_minutes_net + ot_minutes_net;

            NetHours {
                work_minutes_net,
                ot_minutes_net,
                total_minutes_net,
                work_hours_net: minutes_to_hours(work_minutes_net),
                ot_hours_net: minutes_to_hours(ot_minutes_net),
                total_hours_net: minutes_to_hours(total_minutes_net),
            }
        }
    }
}
