//! Pay-rate derivation and multiplier resolution.
//!
//! Rates come from the monthly base salary: a daily rate via the
//! working-days divisor and an hourly rate via the standard-hours
//! divisor. The stored settings are never altered; non-positive divisors
//! are replaced by the fixed defaults (30 days, 8 hours) during
//! derivation only.

use rust_decimal::Decimal;

use crate::config::Settings;
use crate::models::{DayType, PayRates};

use super::net_hours::round2;

/// Resolved day-type multipliers for work and OT pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multipliers {
    /// Multiplier applied to work-window pay.
    pub work_multiplier: Decimal,
    /// Multiplier applied to OT-window pay (before any manual override).
    pub ot_multiplier: Decimal,
}

/// Derives daily and hourly pay rates from the salary settings.
///
/// `daily_rate = base_salary / working_days_per_month` (zero when the
/// base salary is zero) and `hourly_rate = daily_rate /
/// standard_hours_per_day` (zero when the daily rate is zero); both are
/// rounded to 2 decimals.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::derive_rates;
/// use ot_engine::config::Settings;
/// use rust_decimal::Decimal;
///
/// let rates = derive_rates(&Settings::default());
/// assert_eq!(rates.daily_rate, Decimal::from(400)); // 12000 / 30
/// assert_eq!(rates.hourly_rate, Decimal::from(50)); // 400 / 8
/// ```
pub fn derive_rates(settings: &Settings) -> PayRates {
    let base_salary = settings.base_salary;
    let working_days_per_month = positive_or(settings.working_days_per_month, 30);
    let standard_hours_per_day = positive_or(settings.standard_hours_per_day, 8);

    let daily_rate = if base_salary.is_zero() {
        Decimal::ZERO
    } else {
        base_salary / working_days_per_month
    };
    let hourly_rate = if daily_rate.is_zero() {
        Decimal::ZERO
    } else {
        daily_rate / standard_hours_per_day
    };

    PayRates {
        base_salary: round2(base_salary),
        working_days_per_month,
        standard_hours_per_day,
        daily_rate: round2(daily_rate),
        hourly_rate: round2(hourly_rate),
    }
}

/// Looks up the work and OT multipliers for a day type.
///
/// A day type missing from a table falls back to that table's `normal`
/// entry, and finally to the hard defaults of 1 (work) and 1.5 (OT) when
/// the table has no usable entry at all.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::resolve_multipliers;
/// use ot_engine::config::Settings;
/// use ot_engine::models::DayType;
/// use rust_decimal::Decimal;
///
/// let m = resolve_multipliers(&Settings::default(), DayType::Holiday);
/// assert_eq!(m.work_multiplier, Decimal::from(2));
/// assert_eq!(m.ot_multiplier, Decimal::from(2));
/// ```
pub fn resolve_multipliers(settings: &Settings, day_type: DayType) -> Multipliers {
    let lookup = |table: &std::collections::HashMap<DayType, Decimal>, fallback: Decimal| {
        table
            .get(&day_type)
            .or_else(|| table.get(&DayType::Normal))
            .copied()
            .unwrap_or(fallback)
    };

    Multipliers {
        work_multiplier: lookup(&settings.work_multipliers, Decimal::ONE),
        ot_multiplier: lookup(&settings.ot_multipliers, Decimal::new(15, 1)),
    }
}

fn positive_or(value: Decimal, default: i64) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::from(default)
    }
}
