//! Salary/OT pay-cycle resolution for a selected month.
//!
//! Turns a `YYYY-MM` selector plus the cycle settings into concrete date
//! windows and pay dates: the salary cycle, the OT cycle (which may have
//! its own days and pay policy or mirror the salary ones), and the
//! previous OT cycle for carryover checks.

use serde::{Deserialize, Serialize};

use crate::config::{OtPayMode, Settings};

use super::cycles::{DateRange, cycle_range_by_anchor, pay_date_from_range};
use super::dates::{default_month_value, parse_month_value, shift_month};

/// One resolved pay cycle: its date window and pay date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleContext {
    /// The half-open date window of the cycle.
    pub range: DateRange,
    /// The resolved pay date, ISO.
    pub pay_date: String,
}

/// The full resolution for a selected month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleResolution {
    /// The month the resolution was computed for (after fallback).
    pub month: String,
    /// The salary cycle.
    pub salary: CycleContext,
    /// The OT cycle.
    pub ot: CycleContext,
    /// The OT cycle one month back, for carryover reporting.
    pub ot_previous: CycleContext,
}

/// Resolves the salary and OT cycles for a selected `YYYY-MM` month.
///
/// An unparseable month falls back to the current system month. The OT
/// cycle mirrors the salary days under
/// [`OtCycleMode::SameAsSalary`](crate::config::OtCycleMode) and the
/// salary pay date under [`OtPayMode::SameAsSalary`]; the previous OT
/// cycle applies the same rules to the month one step back.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::resolve_cycles;
/// use ot_engine::config::Settings;
///
/// // Defaults: salary is the plain month, OT runs 21st..20th anchored on
/// // the pay month, OT paid on the 25th... which mirrors the salary pay
/// // date under the default sameAsSalary pay mode.
/// let resolution = resolve_cycles(&Settings::default(), "2026-02");
/// assert_eq!(resolution.salary.range.date_from, "2026-02-01");
/// assert_eq!(resolution.ot.range.date_from, "2026-01-21");
/// assert_eq!(resolution.ot.range.date_to_exclusive, "2026-02-21");
/// assert_eq!(resolution.ot_previous.range.date_from, "2025-12-21");
/// ```
pub fn resolve_cycles(settings: &Settings, yyyy_mm: &str) -> CycleResolution {
    let month = if parse_month_value(yyyy_mm).is_some() {
        yyyy_mm.trim().to_string()
    } else {
        default_month_value()
    };

    let salary = salary_cycle(settings, &month);
    let ot = ot_cycle(settings, &month, &salary);

    // Carryover check: the OT cycle one month back, under the same rules.
    let previous_month = shift_month(&month, -1);
    let previous_salary = salary_cycle(settings, &previous_month);
    let ot_previous = ot_cycle(settings, &previous_month, &previous_salary);

    CycleResolution {
        month,
        salary,
        ot,
        ot_previous,
    }
}

fn salary_cycle(settings: &Settings, month: &str) -> CycleContext {
    let range = cycle_range_by_anchor(
        month,
        settings.salary_cycle_start_day,
        Some(settings.effective_salary_end_day()),
        settings.cycle_month_anchor,
    );
    let pay_date = pay_date_from_range(&range, settings.salary_pay_type, settings.salary_pay_day);
    CycleContext { range, pay_date }
}

fn ot_cycle(settings: &Settings, month: &str, salary: &CycleContext) -> CycleContext {
    let (start_day, end_day) = settings.effective_ot_cycle_days();
    let range = cycle_range_by_anchor(month, start_day, Some(end_day), settings.cycle_month_anchor);
    let pay_date = match settings.ot_pay_mode {
        OtPayMode::SameAsSalary => salary.pay_date.clone(),
        OtPayMode::Custom => pay_date_from_range(&range, settings.ot_pay_type, settings.ot_pay_day),
    };
    CycleContext { range, pay_date }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CycleAnchor, OtCycleMode, PayDatePolicy};

    /// 21st-to-20th salary cycle paid at end of month, OT mirroring it,
    /// anchored on the pay month.
    fn thai_factory_settings() -> Settings {
        Settings {
            cycle_month_anchor: CycleAnchor::End,
            salary_cycle_start_day: 21,
            salary_cycle_end_day: Some(20),
            salary_pay_type: PayDatePolicy::Eom,
            ot_cycle_mode: OtCycleMode::SameAsSalary,
            ot_pay_mode: OtPayMode::SameAsSalary,
            ..Default::default()
        }
    }

    #[test]
    fn test_salary_cycle_end_anchor_with_eom_pay() {
        let resolution = resolve_cycles(&thai_factory_settings(), "2026-02");

        assert_eq!(resolution.salary.range.date_from, "2026-01-21");
        assert_eq!(resolution.salary.range.date_to_exclusive, "2026-02-21");
        assert_eq!(resolution.salary.pay_date, "2026-02-28");
    }

    #[test]
    fn test_ot_cycle_mirrors_salary_when_same_as_salary() {
        let resolution = resolve_cycles(&thai_factory_settings(), "2026-02");

        assert_eq!(resolution.ot.range, resolution.salary.range);
        assert_eq!(resolution.ot.pay_date, resolution.salary.pay_date);
    }

    #[test]
    fn test_custom_ot_cycle_with_fixed_pay_day() {
        let settings = Settings {
            ot_cycle_mode: OtCycleMode::Custom,
            ot_cycle_start_day: 26,
            ot_cycle_end_day: Some(25),
            ot_pay_mode: OtPayMode::Custom,
            ot_pay_type: PayDatePolicy::Fixed,
            ot_pay_day: 10,
            ..thai_factory_settings()
        };
        let resolution = resolve_cycles(&settings, "2026-02");

        assert_eq!(resolution.ot.range.date_from, "2026-01-26");
        assert_eq!(resolution.ot.range.date_to_exclusive, "2026-02-26");
        assert_eq!(resolution.ot.pay_date, "2026-02-10");
        // Salary unchanged.
        assert_eq!(resolution.salary.range.date_from, "2026-01-21");
    }

    #[test]
    fn test_previous_ot_cycle_is_one_month_back() {
        let resolution = resolve_cycles(&thai_factory_settings(), "2026-02");

        assert_eq!(resolution.ot_previous.range.date_from, "2025-12-21");
        assert_eq!(resolution.ot_previous.range.date_to_exclusive, "2026-01-21");
        assert_eq!(resolution.ot_previous.pay_date, "2026-01-31");
    }

    #[test]
    fn test_previous_cycle_across_year_boundary() {
        let resolution = resolve_cycles(&thai_factory_settings(), "2026-01");

        assert_eq!(resolution.ot.range.date_from, "2025-12-21");
        assert_eq!(resolution.ot_previous.range.date_from, "2025-11-21");
        assert_eq!(resolution.ot_previous.range.date_to_exclusive, "2025-12-21");
    }

    #[test]
    fn test_start_anchor_shifts_windows_forward() {
        let settings = Settings {
            cycle_month_anchor: CycleAnchor::Start,
            ..thai_factory_settings()
        };
        let resolution = resolve_cycles(&settings, "2026-02");

        assert_eq!(resolution.salary.range.date_from, "2026-02-21");
        assert_eq!(resolution.salary.range.date_to_exclusive, "2026-03-21");
        assert_eq!(resolution.salary.pay_date, "2026-03-31");
    }

    #[test]
    fn test_default_settings_salary_is_plain_month() {
        let resolution = resolve_cycles(&Settings::default(), "2026-02");

        assert_eq!(resolution.salary.range.date_from, "2026-02-01");
        assert_eq!(resolution.salary.range.date_to_exclusive, "2026-03-01");
        // Pay at end of cycle = last day of the month.
        assert_eq!(resolution.salary.pay_date, "2026-02-28");
    }

    #[test]
    fn test_default_ot_pay_mirrors_salary_pay() {
        // Default otPayMode is sameAsSalary even though the OT cycle days
        // are custom.
        let resolution = resolve_cycles(&Settings::default(), "2026-02");

        assert_eq!(resolution.ot.range.date_from, "2026-01-21");
        assert_eq!(resolution.ot.pay_date, resolution.salary.pay_date);
    }

    #[test]
    fn test_invalid_month_falls_back_to_current_month() {
        let resolution = resolve_cycles(&Settings::default(), "February");
        assert_eq!(resolution.month, default_month_value());
    }

    #[test]
    fn test_resolution_serializes_camel_case() {
        let resolution = resolve_cycles(&Settings::default(), "2026-02");
        let json = serde_json::to_string(&resolution).unwrap();
        assert!(json.contains("\"otPrevious\""));
        assert!(json.contains("\"payDate\""));
        assert!(json.contains("\"dateFrom\""));
    }
}
