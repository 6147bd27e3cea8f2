//! Date-range aggregation of per-day results.
//!
//! Filters records into a half-open `[dateFrom, dateToExclusive)` window
//! using the numeric date key (robust against mixed date formats), sums
//! per-day rounded amounts, re-rounds after summation, and finally adds
//! the configured flat monthly allowance/deduction constants once. Small
//! cumulative drift versus a fully-unrounded computation is expected and
//! accepted.

use rust_decimal::Decimal;

use crate::config::Settings;
use crate::models::{Attendance, DayRecord, RangeSummary};

use super::dates::date_key;
use super::day_money::compute_day_money;
use super::net_hours::{compute_net_hours, round2};
use super::rates::derive_rates;

/// Aggregates records within a half-open date range.
///
/// Day counts tally attendance categories; `days_paid` counts the days
/// that generate pay (`present + personal + sick`). Records with
/// unparseable dates never match; if a range bound itself is unparseable
/// the summary covers no records (the monthly constants still apply).
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::compute_range_summary;
/// use ot_engine::config::Settings;
/// use ot_engine::models::DayRecord;
///
/// let records = vec![DayRecord {
///     date: "2026-02-03".to_string(),
///     work_start: Some("08:00".to_string()),
///     work_end: Some("17:00".to_string()),
///     ..Default::default()
/// }];
///
/// let summary =
///     compute_range_summary(&records, &Settings::default(), "2026-02-01", "2026-03-01");
/// assert_eq!(summary.days_present, 1);
/// assert_eq!(summary.days_paid, 1);
/// ```
pub fn compute_range_summary(
    records: &[DayRecord],
    settings: &Settings,
    date_from: &str,
    date_to_exclusive: &str,
) -> RangeSummary {
    let rates = derive_rates(settings);
    let bounds = date_key(date_from).zip(date_key(date_to_exclusive));

    let mut summary = RangeSummary {
        rates,
        date_from: date_from.to_string(),
        date_to_exclusive: date_to_exclusive.to_string(),
        ..Default::default()
    };

    let mut gross_days = Decimal::ZERO;
    let mut allowances_days = Decimal::ZERO;
    let mut deductions_days = Decimal::ZERO;

    for record in records {
        let in_range = bounds.is_some_and(|(from, to)| {
            date_key(&record.date).is_some_and(|key| key >= from && key < to)
        });
        if !in_range {
            continue;
        }

        match record.attendance {
            Attendance::Present => summary.days_present += 1,
            Attendance::Off => summary.days_off += 1,
            Attendance::Personal => summary.days_personal += 1,
            Attendance::Sick => summary.days_sick += 1,
        }

        let hours = compute_net_hours(record, settings);
        summary.work_hours += hours.work_hours_net;
        summary.ot_hours += hours.ot_hours_net;

        let money = compute_day_money(record, settings);
        summary.normal_pay += money.normal_pay;
        summary.ot_pay += money.ot_pay;
        summary.allowances_meal += money.meal_allowance;
        summary.allowances_shift += money.shift_allowance;
        summary.allowances_manual +=
            money.allowances_day - money.meal_allowance - money.shift_allowance;
        allowances_days += money.allowances_day;
        deductions_days += money.deductions_day;
        gross_days += money.gross_day;
    }

    summary.days_paid = summary.days_present + summary.days_personal + summary.days_sick;

    let gross = gross_days + settings.allowances_monthly - settings.deductions_monthly;

    summary.work_hours = round2(summary.work_hours);
    summary.ot_hours = round2(summary.ot_hours);
    summary.normal_pay = round2(summary.normal_pay);
    summary.ot_pay = round2(summary.ot_pay);
    summary.allowances_meal = round2(summary.allowances_meal);
    summary.allowances_shift = round2(summary.allowances_shift);
    summary.allowances_manual = round2(summary.allowances_manual);
    summary.allowances = round2(allowances_days + settings.allowances_monthly);
    summary.deductions = round2(deductions_days + settings.deductions_monthly);
    summary.gross = round2(gross);

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreakSpec, ShiftTag};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn plain_settings() -> Settings {
        Settings {
            meal_allowance_enabled: false,
            shift_allowance_enabled: false,
            ..Default::default()
        }
    }

    fn worked_day(date: &str) -> DayRecord {
        DayRecord {
            date: date.to_string(),
            work_start: Some("08:00".to_string()),
            work_end: Some("17:00".to_string()),
            ot_start: Some("17:30".to_string()),
            ot_end: Some("19:30".to_string()),
            breaks: vec![BreakSpec::new("12:00", "13:00")],
            ..Default::default()
        }
    }

    fn off_day(date: &str) -> DayRecord {
        DayRecord {
            date: date.to_string(),
            attendance: Attendance::Off,
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_and_gross_for_present_plus_off() {
        let records = vec![worked_day("2026-02-03"), off_day("2026-02-04")];
        let summary =
            compute_range_summary(&records, &plain_settings(), "2026-02-01", "2026-03-01");

        assert_eq!(summary.days_present, 1);
        assert_eq!(summary.days_off, 1);
        assert_eq!(summary.days_personal, 0);
        assert_eq!(summary.days_sick, 0);
        assert_eq!(summary.days_paid, 1);
        assert_eq!(summary.work_hours, dec("8"));
        assert_eq!(summary.ot_hours, dec("2"));
        assert_eq!(summary.normal_pay, dec("400.00"));
        assert_eq!(summary.ot_pay, dec("150.00"));
        assert_eq!(summary.gross, dec("550.00"));
    }

    #[test]
    fn test_half_open_range_excludes_end_date() {
        let records = vec![worked_day("2026-02-01"), worked_day("2026-03-01")];
        let summary =
            compute_range_summary(&records, &plain_settings(), "2026-02-01", "2026-03-01");

        assert_eq!(summary.days_present, 1);
    }

    #[test]
    fn test_mixed_date_formats_still_match() {
        let records = vec![worked_day("03/02/2026"), worked_day("2026-2-4")];
        let summary =
            compute_range_summary(&records, &plain_settings(), "2026-02-01", "2026-03-01");

        assert_eq!(summary.days_present, 2);
    }

    #[test]
    fn test_unparseable_record_date_is_skipped() {
        let records = vec![worked_day("someday"), worked_day("2026-02-03")];
        let summary =
            compute_range_summary(&records, &plain_settings(), "2026-02-01", "2026-03-01");

        assert_eq!(summary.days_present, 1);
    }

    #[test]
    fn test_unparseable_bound_matches_nothing() {
        let records = vec![worked_day("2026-02-03")];
        let summary = compute_range_summary(&records, &plain_settings(), "garbage", "2026-03-01");

        assert_eq!(summary.days_present, 0);
        assert_eq!(summary.gross, Decimal::ZERO);
    }

    #[test]
    fn test_monthly_constants_added_once() {
        let settings = Settings {
            allowances_monthly: dec("500"),
            deductions_monthly: dec("750"),
            ..plain_settings()
        };
        let records = vec![worked_day("2026-02-03"), worked_day("2026-02-04")];
        let summary = compute_range_summary(&records, &settings, "2026-02-01", "2026-03-01");

        // 2 * 550 + 500 - 750
        assert_eq!(summary.gross, dec("850.00"));
        assert_eq!(summary.allowances, dec("500.00"));
        assert_eq!(summary.deductions, dec("750.00"));
    }

    #[test]
    fn test_allowance_breakdown_components() {
        let mut record = worked_day("2026-02-03");
        record.shift_type = ShiftTag::Night;
        record.allowances_day = dec("15");

        let summary =
            compute_range_summary(&[record], &Settings::default(), "2026-02-01", "2026-03-01");

        assert_eq!(summary.allowances_meal, dec("30.00"));
        assert_eq!(summary.allowances_shift, dec("100.00"));
        assert_eq!(summary.allowances_manual, dec("15.00"));
        assert_eq!(summary.allowances, dec("145.00"));
    }

    #[test]
    fn test_leave_days_counted_and_paid() {
        let records = vec![
            DayRecord {
                date: "2026-02-05".to_string(),
                attendance: Attendance::Personal,
                ..Default::default()
            },
            DayRecord {
                date: "2026-02-06".to_string(),
                attendance: Attendance::Sick,
                ..Default::default()
            },
        ];
        let summary =
            compute_range_summary(&records, &plain_settings(), "2026-02-01", "2026-03-01");

        assert_eq!(summary.days_personal, 1);
        assert_eq!(summary.days_sick, 1);
        assert_eq!(summary.days_paid, 2);
        // Two flat daily rates.
        assert_eq!(summary.normal_pay, dec("800.00"));
        assert_eq!(summary.work_hours, dec("16"));
    }

    #[test]
    fn test_empty_range_with_monthly_constants() {
        let settings = Settings {
            allowances_monthly: dec("300"),
            ..plain_settings()
        };
        let summary = compute_range_summary(&[], &settings, "2026-02-01", "2026-03-01");

        assert_eq!(summary.days_paid, 0);
        assert_eq!(summary.gross, dec("300.00"));
    }

    #[test]
    fn test_echoes_range_bounds() {
        let summary = compute_range_summary(&[], &plain_settings(), "2026-02-01", "2026-03-01");
        assert_eq!(summary.date_from, "2026-02-01");
        assert_eq!(summary.date_to_exclusive, "2026-03-01");
    }
}
