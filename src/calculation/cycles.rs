//! Pay-cycle date-range builders and pay-date resolution.
//!
//! A cycle is a half-open `[dateFrom, dateToExclusive)` window derived
//! from a selected `YYYY-MM` month, a start day-of-month (clamped to 1–28
//! to dodge short months), and an end day-of-month where 0 is an
//! end-of-month sentinel. The selected month can anchor either end of the
//! window. An unparseable month selector falls back to the current system
//! month; these builders never fail.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::{CycleAnchor, PayDatePolicy};

use super::dates::{
    clamp_day, date_key, days_in_month, default_month_value, iso_string, parse_month_value,
    prev_date,
};

/// A half-open date range: inclusive start, exclusive end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// Inclusive start, ISO date.
    pub date_from: String,
    /// Exclusive end, ISO date.
    pub date_to_exclusive: String,
}

impl DateRange {
    /// The inclusive last day of the range.
    pub fn last_day(&self) -> String {
        prev_date(&self.date_to_exclusive)
    }

    /// Whether a date string falls inside the range, compared via
    /// [`date_key`] so mixed date formats still match. An unparseable
    /// date (or bound) never matches.
    pub fn contains(&self, date: &str) -> bool {
        let (Some(key), Some(from), Some(to)) = (
            date_key(date),
            date_key(&self.date_from),
            date_key(&self.date_to_exclusive),
        ) else {
            return false;
        };
        key >= from && key < to
    }
}

/// The calendar-month range for a `YYYY-MM` selector:
/// `[first of month, first of next month)`.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::month_range;
///
/// let range = month_range("2026-02");
/// assert_eq!(range.date_from, "2026-02-01");
/// assert_eq!(range.date_to_exclusive, "2026-03-01");
/// ```
pub fn month_range(yyyy_mm: &str) -> DateRange {
    let (year, month) = parse_month_value(yyyy_mm)
        .or_else(|| parse_month_value(&default_month_value()))
        .unwrap_or((1970, 1));
    let start = ymd(year, month, 1);
    let end = if month == 12 {
        ymd(year + 1, 1, 1)
    } else {
        ymd(year, month + 1, 1)
    };
    DateRange {
        date_from: iso_string(start),
        date_to_exclusive: iso_string(end),
    }
}

/// Cycle range where the selected month is the cycle's first month.
///
/// `start_day` is clamped to 1–28. `end_day` of `None` defaults to the
/// day before the start day (EOM sentinel when the cycle starts on the
/// 1st); an explicit 0 means end-of-month. When the end day is smaller
/// than the start day the cycle ends in the following month. A cycle that
/// starts on the 1st and ends at (or effectively at) month end collapses
/// to [`month_range`].
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::cycle_range;
///
/// // 21st of February to 20th of March.
/// let range = cycle_range("2026-02", 21, Some(20));
/// assert_eq!(range.date_from, "2026-02-21");
/// assert_eq!(range.date_to_exclusive, "2026-03-21");
/// ```
pub fn cycle_range(yyyy_mm: &str, start_day: u32, end_day: Option<u32>) -> DateRange {
    let Some((year, month)) = parse_month_value(yyyy_mm) else {
        return month_range(&default_month_value());
    };

    let sd = start_day.clamp(1, 28);
    let ed = end_day.unwrap_or(if sd == 1 { 0 } else { sd - 1 });

    if sd == 1 && (ed == 0 || ed >= 28) {
        return month_range(yyyy_mm);
    }

    let start = ymd(year, month, clamp_day(year, month, sd));

    let (end_year, end_month) = if ed != 0 && ed < sd {
        next_month(year, month)
    } else {
        (year, month)
    };

    let end_inclusive_day = if ed == 0 {
        days_in_month(end_year, end_month)
    } else {
        clamp_day(end_year, end_month, ed.min(31))
    };
    let end_exclusive = ymd(end_year, end_month, end_inclusive_day)
        .succ_opt()
        .expect("valid date has a successor");

    DateRange {
        date_from: iso_string(start),
        date_to_exclusive: iso_string(end_exclusive),
    }
}

/// Cycle range where the selected month is the cycle's last (pay) month.
///
/// With `start_day = 21`, `end_day = 20` and a selected month of 2026-02,
/// the window is 2026-01-21 through 2026-02-20 inclusive. An `end_day` of
/// 0 (or `None` with `start_day` 1) means the cycle ends at the end of
/// the selected month; the start only shifts into the previous month when
/// the end day is a real day smaller than the start day.
pub fn cycle_range_by_end_month(yyyy_mm: &str, start_day: u32, end_day: Option<u32>) -> DateRange {
    let Some((year, month)) = parse_month_value(yyyy_mm) else {
        return month_range(&default_month_value());
    };

    let sd = start_day.clamp(1, 28);
    let ed = end_day.unwrap_or(if sd == 1 { 0 } else { sd - 1 }).min(31);

    let end_inclusive = if ed == 0 {
        ymd(year, month, days_in_month(year, month))
    } else {
        ymd(year, month, clamp_day(year, month, ed))
    };

    let (start_year, start_month) = if ed != 0 && ed < sd {
        previous_month(year, month)
    } else {
        (year, month)
    };
    let start = ymd(start_year, start_month, clamp_day(start_year, start_month, sd));
    let end_exclusive = end_inclusive
        .succ_opt()
        .expect("valid date has a successor");

    DateRange {
        date_from: iso_string(start),
        date_to_exclusive: iso_string(end_exclusive),
    }
}

/// Dispatches to [`cycle_range`] or [`cycle_range_by_end_month`] per the
/// configured anchor.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::cycle_range_by_anchor;
/// use ot_engine::config::CycleAnchor;
///
/// let range = cycle_range_by_anchor("2026-02", 21, Some(20), CycleAnchor::End);
/// assert_eq!(range.date_from, "2026-01-21");
/// assert_eq!(range.date_to_exclusive, "2026-02-21");
/// ```
pub fn cycle_range_by_anchor(
    yyyy_mm: &str,
    start_day: u32,
    end_day: Option<u32>,
    anchor: CycleAnchor,
) -> DateRange {
    match anchor {
        CycleAnchor::Start => cycle_range(yyyy_mm, start_day, end_day),
        CycleAnchor::End => cycle_range_by_end_month(yyyy_mm, start_day, end_day),
    }
}

/// Resolves the pay date for a cycle range.
///
/// The policy operates on the cycle's inclusive last day:
/// [`PayDatePolicy::End`] pays on that day, [`PayDatePolicy::Eom`] on the
/// last day of that day's month, and [`PayDatePolicy::Fixed`] on
/// `pay_day` clamped into that month (0 behaves as 1).
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::{DateRange, pay_date_from_range};
/// use ot_engine::config::PayDatePolicy;
///
/// let range = DateRange {
///     date_from: "2026-01-21".to_string(),
///     date_to_exclusive: "2026-02-21".to_string(),
/// };
/// assert_eq!(pay_date_from_range(&range, PayDatePolicy::End, 0), "2026-02-20");
/// assert_eq!(pay_date_from_range(&range, PayDatePolicy::Eom, 0), "2026-02-28");
/// assert_eq!(pay_date_from_range(&range, PayDatePolicy::Fixed, 25), "2026-02-25");
/// ```
pub fn pay_date_from_range(range: &DateRange, pay_type: PayDatePolicy, pay_day: u32) -> String {
    let end_inclusive = range.last_day();
    let Ok(end_date) = NaiveDate::parse_from_str(&end_inclusive, "%Y-%m-%d") else {
        return end_inclusive;
    };
    let (year, month) = (end_date.year(), end_date.month());

    match pay_type {
        PayDatePolicy::End => end_inclusive,
        PayDatePolicy::Eom => iso_string(ymd(year, month, days_in_month(year, month))),
        PayDatePolicy::Fixed => {
            let day = clamp_day(year, month, pay_day.max(1));
            iso_string(ymd(year, month, day))
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("clamped calendar date")
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_range_february() {
        let range = month_range("2026-02");
        assert_eq!(range.date_from, "2026-02-01");
        assert_eq!(range.date_to_exclusive, "2026-03-01");
    }

    #[test]
    fn test_month_range_december_rolls_year() {
        let range = month_range("2026-12");
        assert_eq!(range.date_from, "2026-12-01");
        assert_eq!(range.date_to_exclusive, "2027-01-01");
    }

    #[test]
    fn test_month_range_invalid_falls_back_to_current_month() {
        let range = month_range("not-a-month");
        let today = default_month_value();
        assert!(range.date_from.starts_with(&today));
    }

    #[test]
    fn test_cycle_range_start_anchor_rolls_into_next_month() {
        // Selected month is the start month: 21 Feb to 20 Mar inclusive.
        let range = cycle_range("2026-02", 21, Some(20));
        assert_eq!(range.date_from, "2026-02-21");
        assert_eq!(range.date_to_exclusive, "2026-03-21");
    }

    #[test]
    fn test_cycle_range_first_to_eom_is_month_range() {
        let range = cycle_range("2026-02", 1, Some(0));
        assert_eq!(range, month_range("2026-02"));
    }

    #[test]
    fn test_cycle_range_first_with_high_end_day_is_month_range() {
        // startDay 1 with endDay >= 28 collapses to the plain month.
        let range = cycle_range("2026-02", 1, Some(30));
        assert_eq!(range, month_range("2026-02"));
    }

    #[test]
    fn test_cycle_range_same_month_window() {
        // 1st to 15th of the selected month.
        let range = cycle_range("2026-02", 1, Some(15));
        assert_eq!(range.date_from, "2026-02-01");
        assert_eq!(range.date_to_exclusive, "2026-02-16");
    }

    #[test]
    fn test_cycle_range_eom_end_in_start_month() {
        // Start on the 15th, end sentinel 0: 15 Feb to end of Feb.
        let range = cycle_range("2026-02", 15, Some(0));
        assert_eq!(range.date_from, "2026-02-15");
        assert_eq!(range.date_to_exclusive, "2026-03-01");
    }

    #[test]
    fn test_cycle_range_start_day_clamped_to_28() {
        let range = cycle_range("2026-02", 31, Some(20));
        assert_eq!(range.date_from, "2026-02-28");
    }

    #[test]
    fn test_cycle_range_end_day_clamped_to_short_month() {
        // End day 31 resolved in February clamps to the 28th.
        let range = cycle_range("2026-01", 5, Some(31));
        assert_eq!(range.date_from, "2026-01-05");
        assert_eq!(range.date_to_exclusive, "2026-02-01");
    }

    #[test]
    fn test_cycle_range_december_rollover() {
        let range = cycle_range("2026-12", 21, Some(20));
        assert_eq!(range.date_from, "2026-12-21");
        assert_eq!(range.date_to_exclusive, "2027-01-21");
    }

    #[test]
    fn test_cycle_range_by_end_month_basic() {
        // Selected month is the pay month: 21 Jan to 20 Feb inclusive.
        let range = cycle_range_by_end_month("2026-02", 21, Some(20));
        assert_eq!(range.date_from, "2026-01-21");
        assert_eq!(range.date_to_exclusive, "2026-02-21");
    }

    #[test]
    fn test_cycle_range_by_end_month_january_reaches_back_a_year() {
        let range = cycle_range_by_end_month("2026-01", 21, Some(20));
        assert_eq!(range.date_from, "2025-12-21");
        assert_eq!(range.date_to_exclusive, "2026-01-21");
    }

    #[test]
    fn test_cycle_range_by_end_month_eom_sentinel_stays_in_month() {
        // endDay 0: ends at EOM of the selected month, start not shifted.
        let range = cycle_range_by_end_month("2026-02", 21, Some(0));
        assert_eq!(range.date_from, "2026-02-21");
        assert_eq!(range.date_to_exclusive, "2026-03-01");
    }

    #[test]
    fn test_cycle_range_by_end_month_leap_february() {
        let range = cycle_range_by_end_month("2028-02", 1, Some(0));
        assert_eq!(range.date_from, "2028-02-01");
        assert_eq!(range.date_to_exclusive, "2028-03-01");
        assert_eq!(range.last_day(), "2028-02-29");
    }

    #[test]
    fn test_cycle_range_by_anchor_dispatch() {
        let by_start = cycle_range_by_anchor("2026-02", 21, Some(20), CycleAnchor::Start);
        let by_end = cycle_range_by_anchor("2026-02", 21, Some(20), CycleAnchor::End);
        assert_eq!(by_start.date_from, "2026-02-21");
        assert_eq!(by_end.date_from, "2026-01-21");
    }

    #[test]
    fn test_pay_date_end_policy() {
        let range = cycle_range_by_end_month("2026-02", 21, Some(20));
        assert_eq!(
            pay_date_from_range(&range, PayDatePolicy::End, 0),
            "2026-02-20"
        );
    }

    #[test]
    fn test_pay_date_eom_policy_common_and_leap_year() {
        let range = DateRange {
            date_from: "2026-01-21".to_string(),
            date_to_exclusive: "2026-02-21".to_string(),
        };
        assert_eq!(
            pay_date_from_range(&range, PayDatePolicy::Eom, 0),
            "2026-02-28"
        );

        let leap = DateRange {
            date_from: "2028-01-21".to_string(),
            date_to_exclusive: "2028-02-21".to_string(),
        };
        assert_eq!(
            pay_date_from_range(&leap, PayDatePolicy::Eom, 0),
            "2028-02-29"
        );
    }

    #[test]
    fn test_pay_date_fixed_policy_clamps_into_month() {
        let range = DateRange {
            date_from: "2026-01-21".to_string(),
            date_to_exclusive: "2026-02-21".to_string(),
        };
        assert_eq!(
            pay_date_from_range(&range, PayDatePolicy::Fixed, 25),
            "2026-02-25"
        );
        assert_eq!(
            pay_date_from_range(&range, PayDatePolicy::Fixed, 31),
            "2026-02-28"
        );
        // Day 0 behaves as day 1.
        assert_eq!(
            pay_date_from_range(&range, PayDatePolicy::Fixed, 0),
            "2026-02-01"
        );
    }

    #[test]
    fn test_pay_date_malformed_range_passes_through() {
        let range = DateRange {
            date_from: "x".to_string(),
            date_to_exclusive: "y".to_string(),
        };
        assert_eq!(pay_date_from_range(&range, PayDatePolicy::Eom, 0), "y");
    }

    #[test]
    fn test_range_contains_uses_date_keys() {
        let range = DateRange {
            date_from: "2026-01-21".to_string(),
            date_to_exclusive: "2026-02-21".to_string(),
        };
        assert!(range.contains("2026-01-21"));
        assert!(range.contains("2026-02-20"));
        assert!(range.contains("20/02/2026"));
        assert!(!range.contains("2026-02-21"));
        assert!(!range.contains("2026-01-20"));
        assert!(!range.contains("not a date"));
    }

    #[test]
    fn test_range_serializes_camel_case() {
        let range = month_range("2026-02");
        let json = serde_json::to_string(&range).unwrap();
        assert!(json.contains("\"dateFrom\":\"2026-02-01\""));
        assert!(json.contains("\"dateToExclusive\":\"2026-03-01\""));
    }
}
