//! Money calculation result models.
//!
//! This module contains the result types produced by the money engine:
//! derived pay rates, the per-day money breakdown, and the date-range
//! summary. All monetary fields are [`Decimal`] rounded to 2 decimals at
//! the point of return.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Attendance, DayType};

/// Pay rates derived from the salary settings.
///
/// `daily_rate = base_salary / working_days_per_month` and
/// `hourly_rate = daily_rate / standard_hours_per_day`, both rounded to
/// 2 decimals. Non-positive divisors are replaced by the defaults (30 and
/// 8) during derivation without altering the stored settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRates {
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Divisor used for the daily rate.
    pub working_days_per_month: Decimal,
    /// Divisor used for the hourly rate.
    pub standard_hours_per_day: Decimal,
    /// Pay per working day.
    pub daily_rate: Decimal,
    /// Pay per working hour.
    pub hourly_rate: Decimal,
}

/// Per-day money breakdown for one record.
///
/// Produced by [`compute_day_money`](crate::calculation::compute_day_money);
/// every numeric field is zero for an `off` day, and leave days are paid a
/// flat daily rate with no automatic allowances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMoney {
    /// The rates the amounts were derived from.
    pub rates: PayRates,
    /// Day classification the multipliers were resolved for.
    pub day_type: DayType,
    /// Attendance category the branch was selected by.
    pub attendance: Attendance,
    /// Applied work multiplier (0 for `off`, 1 for leave).
    pub work_multiplier: Decimal,
    /// Applied OT multiplier after any manual override.
    pub ot_multiplier: Decimal,
    /// Net worked hours the pay was computed from.
    pub work_hours: Decimal,
    /// Net overtime hours the pay was computed from.
    pub ot_hours: Decimal,
    /// Pay for the work window.
    pub normal_pay: Decimal,
    /// Pay for the overtime window.
    pub ot_pay: Decimal,
    /// Automatic meal allowance component.
    pub meal_allowance: Decimal,
    /// Automatic (or overridden) shift allowance component.
    pub shift_allowance: Decimal,
    /// Total allowances for the day: manual + meal + shift.
    pub allowances_day: Decimal,
    /// Manual deductions for the day.
    pub deductions_day: Decimal,
    /// `normal_pay + ot_pay + allowances_day - deductions_day`.
    pub gross_day: Decimal,
}

/// Aggregated totals over a half-open date range.
///
/// Day counts tally attendance categories; money fields sum the per-day
/// rounded amounts and are re-rounded after summation, then the configured
/// flat monthly allowance/deduction constants are added once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSummary {
    /// The rates in effect for the aggregation.
    pub rates: PayRates,
    /// Inclusive start of the range, ISO date.
    pub date_from: String,
    /// Exclusive end of the range, ISO date.
    pub date_to_exclusive: String,
    /// Days with `present` attendance.
    pub days_present: u32,
    /// Days with `off` attendance.
    pub days_off: u32,
    /// Days with `personal` leave.
    pub days_personal: u32,
    /// Days with `sick` leave.
    pub days_sick: u32,
    /// Days that generate pay: `present + personal + sick`.
    pub days_paid: u32,
    /// Total net worked hours.
    pub work_hours: Decimal,
    /// Total net overtime hours.
    pub ot_hours: Decimal,
    /// Total work-window pay.
    pub normal_pay: Decimal,
    /// Total overtime pay.
    pub ot_pay: Decimal,
    /// Sum of automatic meal allowances.
    pub allowances_meal: Decimal,
    /// Sum of shift allowances (automatic and overridden).
    pub allowances_shift: Decimal,
    /// Sum of manual per-day allowances.
    pub allowances_manual: Decimal,
    /// All allowances: per-day totals plus the monthly constant.
    pub allowances: Decimal,
    /// All deductions: per-day totals plus the monthly constant.
    pub deductions: Decimal,
    /// Final gross for the range.
    pub gross: Decimal,
}
