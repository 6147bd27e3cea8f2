//! Per-day money computation.
//!
//! Branches on attendance exactly like the hours calculator and must stay
//! consistent with it:
//!
//! - `off`: every numeric field is zero, including the manual per-day
//!   adjustments.
//! - `personal`/`sick`: flat daily rate, bypassing both multiplier tables
//!   (leave pay is not day-type sensitive); manual adjustments apply,
//!   automatic allowances do not.
//! - `present`: net hours times the hourly rate times the resolved
//!   multipliers, plus automatic meal/shift allowances.
//!
//! All monetary outputs are rounded to 2 decimals at the point of return.

use rust_decimal::Decimal;

use crate::config::Settings;
use crate::models::{Attendance, DayMoney, DayRecord};

use super::net_hours::{compute_net_hours, round2};
use super::rates::{derive_rates, resolve_multipliers};

/// Computes the money breakdown for a single day.
///
/// Net hours are recomputed from the record and settings; the record's
/// `computed` cache is never consulted. The OT multiplier honors the
/// record's manual override when it is enabled and greater than zero,
/// falling back to the table value otherwise.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::compute_day_money;
/// use ot_engine::config::Settings;
/// use ot_engine::models::{BreakSpec, DayRecord};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let settings = Settings::default(); // hourly rate 50
/// let record = DayRecord {
///     date: "2026-02-03".to_string(),
///     work_start: Some("08:00".to_string()),
///     work_end: Some("17:00".to_string()),
///     ot_start: Some("17:30".to_string()),
///     ot_end: Some("19:30".to_string()),
///     breaks: vec![BreakSpec::new("12:00", "13:00")],
///     ..Default::default()
/// };
///
/// let money = compute_day_money(&record, &settings);
/// assert_eq!(money.normal_pay, Decimal::from_str("400.00").unwrap());
/// assert_eq!(money.ot_pay, Decimal::from_str("150.00").unwrap());
/// ```
pub fn compute_day_money(record: &DayRecord, settings: &Settings) -> DayMoney {
    let rates = derive_rates(settings);
    let computed = compute_net_hours(record, settings);
    let day_type = record.day_type;
    let attendance = record.attendance;

    match attendance {
        // OFF: strictly zero, manual adjustments included.
        Attendance::Off => DayMoney {
            rates,
            day_type,
            attendance,
            ..Default::default()
        },
        // LEAVE: flat daily rate, no multipliers, no automatic allowances.
        Attendance::Personal | Attendance::Sick => {
            let normal_pay = rates.daily_rate;
            let allowances_day = round2(record.allowances_day);
            let deductions_day = round2(record.deductions_day);
            let gross_day = normal_pay + allowances_day - deductions_day;
            DayMoney {
                rates,
                day_type,
                attendance,
                work_multiplier: Decimal::ONE,
                ot_multiplier: Decimal::ZERO,
                work_hours: computed.work_hours_net,
                ot_hours: Decimal::ZERO,
                normal_pay: round2(normal_pay),
                ot_pay: Decimal::ZERO,
                meal_allowance: Decimal::ZERO,
                shift_allowance: Decimal::ZERO,
                allowances_day,
                deductions_day,
                gross_day: round2(gross_day),
            }
        }
        Attendance::Present => {
            let multipliers = resolve_multipliers(settings, day_type);
            let ot_multiplier = record
                .manual_ot_multiplier()
                .unwrap_or(multipliers.ot_multiplier);

            let work_hours = computed.work_hours_net;
            let ot_hours = computed.ot_hours_net;

            let normal_pay = work_hours * rates.hourly_rate * multipliers.work_multiplier;
            let ot_pay = ot_hours * rates.hourly_rate * ot_multiplier;

            let meal_allowance = meal_allowance(settings, ot_hours);
            let shift_allowance = shift_allowance(settings, record);
            let allowances_day = record.allowances_day + meal_allowance + shift_allowance;
            let deductions_day = record.deductions_day;

            let gross_day = normal_pay + ot_pay + allowances_day - deductions_day;

            DayMoney {
                rates,
                day_type,
                attendance,
                work_multiplier: multipliers.work_multiplier,
                ot_multiplier,
                work_hours,
                ot_hours,
                normal_pay: round2(normal_pay),
                ot_pay: round2(ot_pay),
                meal_allowance: round2(meal_allowance),
                shift_allowance: round2(shift_allowance),
                allowances_day: round2(allowances_day),
                deductions_day: round2(deductions_day),
                gross_day: round2(gross_day),
            }
        }
    }
}

/// Automatic meal allowance: the elevated amount once net OT hours exceed
/// the configured threshold, the base amount otherwise.
fn meal_allowance(settings: &Settings, ot_hours: Decimal) -> Decimal {
    if !settings.meal_allowance_enabled {
        return Decimal::ZERO;
    }
    if ot_hours > settings.meal_allowance_ot_threshold {
        settings.meal_allowance_ot_amount
    } else {
        settings.meal_allowance_base
    }
}

/// Automatic shift allowance by shift tag, with the record's explicit
/// override taking precedence when present.
fn shift_allowance(settings: &Settings, record: &DayRecord) -> Decimal {
    if !settings.shift_allowance_enabled {
        return Decimal::ZERO;
    }
    record.shift_allowance_override.unwrap_or_else(|| {
        settings
            .shift_allowances
            .get(&record.shift_type)
            .copied()
            .unwrap_or(Decimal::ZERO)
    })
}
