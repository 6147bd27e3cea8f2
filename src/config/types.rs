//! Settings types for the payroll engine.
//!
//! This module contains the strongly-typed settings structure consumed by
//! every calculation. Field names serialize in camelCase so that data
//! files exported by the original tracker deserialize directly. Every
//! field has a default; a partial settings file is valid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{BreakSpec, DayRecord, DayType, ShiftTag};

/// Whether a selected month names the first or the last month of a pay
/// cycle window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleAnchor {
    /// The selected month is the cycle's first month.
    Start,
    /// The selected month is the cycle's last (pay) month.
    #[default]
    End,
}

/// Policy for deriving a pay date from a cycle range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayDatePolicy {
    /// Pay on the last (inclusive) day of the cycle.
    #[default]
    End,
    /// Pay on the last day of the month the cycle ends in.
    Eom,
    /// Pay on a fixed day of the month the cycle ends in.
    Fixed,
}

/// Whether the OT cycle has its own day configuration or mirrors the
/// salary cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OtCycleMode {
    /// OT uses its own start/end days.
    #[default]
    Custom,
    /// OT mirrors the salary cycle days.
    SameAsSalary,
}

/// Whether the OT pay date has its own policy or mirrors the salary pay
/// date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OtPayMode {
    /// OT uses its own pay-date policy.
    Custom,
    /// OT is paid on the salary pay date.
    #[default]
    SameAsSalary,
}

/// Pre-fill template for one shift tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShiftTemplate {
    /// Default work window start, `HH:MM`.
    pub work_start: Option<String>,
    /// Default work window end, `HH:MM`.
    pub work_end: Option<String>,
    /// Default OT window start, `HH:MM`.
    pub ot_start: Option<String>,
    /// Default OT window end, `HH:MM`.
    pub ot_end: Option<String>,
    /// Default break intervals.
    pub breaks: Vec<BreakSpec>,
}

/// Process-wide configuration, loaded once at startup and passed to every
/// calculation as an immutable snapshot.
///
/// # Example
///
/// ```
/// use ot_engine::config::Settings;
/// use ot_engine::models::DayType;
/// use rust_decimal::Decimal;
///
/// let settings = Settings::default();
/// assert_eq!(settings.base_salary, Decimal::from(12000));
/// assert_eq!(settings.working_days_per_month, Decimal::from(30));
/// assert_eq!(settings.ot_multipliers[&DayType::Normal], Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Interchange schema version.
    pub schema_version: u32,
    /// Employee identifier carried into export rows.
    pub employee_id: String,
    /// Department label carried into export rows.
    pub department: String,

    /// Mask money values in user-facing output. Amounts are still
    /// computed internally.
    pub privacy_hide_money: bool,

    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Divisor for the daily rate; non-positive values fall back to 30
    /// during rate derivation only.
    pub working_days_per_month: Decimal,
    /// Divisor for the hourly rate; non-positive values fall back to 8
    /// during rate derivation only.
    pub standard_hours_per_day: Decimal,

    /// Work-pay multiplier per day type.
    pub work_multipliers: HashMap<DayType, Decimal>,
    /// OT-pay multiplier per day type.
    pub ot_multipliers: HashMap<DayType, Decimal>,

    /// Shift pre-fill templates by tag.
    pub shift_templates: HashMap<ShiftTag, ShiftTemplate>,
    /// Shift tag used when creating a record without one.
    pub default_shift_type: ShiftTag,
    /// Day type used when creating a record without one.
    pub default_day_type: DayType,

    /// How the selected month anchors a cycle window.
    pub cycle_month_anchor: CycleAnchor,
    /// Salary cycle start day-of-month (1–28).
    pub salary_cycle_start_day: u32,
    /// Salary cycle end day-of-month; 0 = end of month.
    pub salary_cycle_end_day: Option<u32>,
    /// Salary pay-date policy.
    pub salary_pay_type: PayDatePolicy,
    /// Day of month for [`PayDatePolicy::Fixed`] salary pay.
    pub salary_pay_day: u32,

    /// Whether the OT cycle mirrors the salary cycle days.
    pub ot_cycle_mode: OtCycleMode,
    /// OT cycle start day-of-month when custom.
    pub ot_cycle_start_day: u32,
    /// OT cycle end day-of-month when custom; 0 = end of month.
    pub ot_cycle_end_day: Option<u32>,
    /// Whether the OT pay date mirrors the salary pay date.
    pub ot_pay_mode: OtPayMode,
    /// OT pay-date policy when [`OtPayMode::Custom`].
    pub ot_pay_type: PayDatePolicy,
    /// Day of month for [`PayDatePolicy::Fixed`] OT pay.
    pub ot_pay_day: u32,

    /// Automatic meal allowance on worked days.
    pub meal_allowance_enabled: bool,
    /// Meal allowance per worked day.
    pub meal_allowance_base: Decimal,
    /// OT-hours threshold above which the elevated meal amount applies.
    pub meal_allowance_ot_threshold: Decimal,
    /// Meal allowance when net OT hours exceed the threshold.
    pub meal_allowance_ot_amount: Decimal,

    /// Automatic shift allowance on worked days.
    pub shift_allowance_enabled: bool,
    /// Shift allowance per shift tag.
    pub shift_allowances: HashMap<ShiftTag, Decimal>,

    /// Flat allowance added once per aggregated range.
    pub allowances_monthly: Decimal,
    /// Flat deduction subtracted once per aggregated range.
    pub deductions_monthly: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: 2,
            employee_id: String::new(),
            department: String::new(),
            privacy_hide_money: false,
            base_salary: Decimal::from(12000),
            working_days_per_month: Decimal::from(30),
            standard_hours_per_day: Decimal::from(8),
            work_multipliers: HashMap::from([
                (DayType::Normal, Decimal::ONE),
                (DayType::Holiday, Decimal::from(2)),
                (DayType::Special, Decimal::from(3)),
            ]),
            ot_multipliers: HashMap::from([
                (DayType::Normal, Decimal::new(15, 1)),
                (DayType::Holiday, Decimal::from(2)),
                (DayType::Special, Decimal::from(3)),
            ]),
            shift_templates: default_shift_templates(),
            default_shift_type: ShiftTag::Day,
            default_day_type: DayType::Normal,
            cycle_month_anchor: CycleAnchor::End,
            salary_cycle_start_day: 1,
            salary_cycle_end_day: Some(0),
            salary_pay_type: PayDatePolicy::End,
            salary_pay_day: 0,
            ot_cycle_mode: OtCycleMode::Custom,
            ot_cycle_start_day: 21,
            ot_cycle_end_day: Some(20),
            ot_pay_mode: OtPayMode::SameAsSalary,
            ot_pay_type: PayDatePolicy::Fixed,
            ot_pay_day: 25,
            meal_allowance_enabled: true,
            meal_allowance_base: Decimal::from(30),
            meal_allowance_ot_threshold: Decimal::new(25, 1),
            meal_allowance_ot_amount: Decimal::from(60),
            shift_allowance_enabled: true,
            shift_allowances: HashMap::from([
                (ShiftTag::Day, Decimal::ZERO),
                (ShiftTag::Night, Decimal::from(100)),
                (ShiftTag::Custom, Decimal::ZERO),
            ]),
            allowances_monthly: Decimal::ZERO,
            deductions_monthly: Decimal::ZERO,
        }
    }
}

fn default_shift_templates() -> HashMap<ShiftTag, ShiftTemplate> {
    HashMap::from([
        (
            ShiftTag::Day,
            ShiftTemplate {
                work_start: Some("08:00".to_string()),
                work_end: Some("17:00".to_string()),
                ot_start: Some("17:00".to_string()),
                ot_end: Some("20:00".to_string()),
                breaks: vec![
                    BreakSpec::new("11:30", "12:00"),
                    BreakSpec::new("17:00", "17:30"),
                ],
            },
        ),
        (
            ShiftTag::Night,
            ShiftTemplate {
                work_start: Some("20:00".to_string()),
                work_end: Some("05:00".to_string()),
                ot_start: Some("05:00".to_string()),
                ot_end: Some("08:00".to_string()),
                breaks: vec![BreakSpec::new("00:00", "00:30")],
            },
        ),
        (ShiftTag::Custom, ShiftTemplate::default()),
    ])
}

impl Settings {
    /// Returns the pre-fill template for a shift tag, or an empty
    /// template when none is configured.
    pub fn template_for(&self, shift: ShiftTag) -> ShiftTemplate {
        self.shift_templates.get(&shift).cloned().unwrap_or_default()
    }

    /// Builds a new record for a date from the shift template.
    ///
    /// This constructs a complete value in one step; editors build a
    /// fresh record from input state and hand it to the store whole
    /// rather than mutating a shared one.
    ///
    /// # Example
    ///
    /// ```
    /// use ot_engine::config::Settings;
    /// use ot_engine::models::ShiftTag;
    ///
    /// let settings = Settings::default();
    /// let record = settings.prefill_record("2026-02-03", None);
    /// assert_eq!(record.work_start.as_deref(), Some("08:00"));
    /// assert_eq!(record.breaks.len(), 2);
    /// ```
    pub fn prefill_record(&self, date: impl Into<String>, shift: Option<ShiftTag>) -> DayRecord {
        let shift = shift.unwrap_or(self.default_shift_type);
        let template = self.template_for(shift);
        DayRecord {
            date: date.into(),
            shift_type: shift,
            day_type: self.default_day_type,
            work_start: template.work_start,
            work_end: template.work_end,
            ot_start: template.ot_start,
            ot_end: template.ot_end,
            breaks: template.breaks,
            ..Default::default()
        }
    }

    /// The effective salary-cycle end day; `None` in the settings means a
    /// rolling window ending the day before the start day (or EOM when
    /// the cycle starts on the 1st).
    pub fn effective_salary_end_day(&self) -> u32 {
        effective_end_day(self.salary_cycle_end_day, self.salary_cycle_start_day)
    }

    /// The effective OT-cycle start/end days after the
    /// [`OtCycleMode::SameAsSalary`] mirror.
    pub fn effective_ot_cycle_days(&self) -> (u32, u32) {
        match self.ot_cycle_mode {
            OtCycleMode::SameAsSalary => {
                (self.salary_cycle_start_day, self.effective_salary_end_day())
            }
            OtCycleMode::Custom => (
                self.ot_cycle_start_day,
                effective_end_day(self.ot_cycle_end_day, self.ot_cycle_start_day),
            ),
        }
    }
}

/// End-day default rule: a missing end day means "day before the start
/// day", with the EOM sentinel when the cycle starts on the 1st.
fn effective_end_day(end_day: Option<u32>, start_day: u32) -> u32 {
    end_day.unwrap_or(if start_day <= 1 { 0 } else { start_day - 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_settings_match_original_app() {
        let s = Settings::default();
        assert_eq!(s.schema_version, 2);
        assert_eq!(s.base_salary, dec("12000"));
        assert_eq!(s.working_days_per_month, dec("30"));
        assert_eq!(s.standard_hours_per_day, dec("8"));
        assert_eq!(s.work_multipliers[&DayType::Normal], dec("1"));
        assert_eq!(s.work_multipliers[&DayType::Holiday], dec("2"));
        assert_eq!(s.work_multipliers[&DayType::Special], dec("3"));
        assert_eq!(s.ot_multipliers[&DayType::Normal], dec("1.5"));
        assert_eq!(s.meal_allowance_base, dec("30"));
        assert_eq!(s.meal_allowance_ot_threshold, dec("2.5"));
        assert_eq!(s.meal_allowance_ot_amount, dec("60"));
        assert_eq!(s.shift_allowances[&ShiftTag::Night], dec("100"));
        assert_eq!(s.ot_cycle_start_day, 21);
        assert_eq!(s.ot_cycle_end_day, Some(20));
        assert_eq!(s.ot_pay_day, 25);
        assert!(!s.privacy_hide_money);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: Settings = serde_json::from_str(r#"{"baseSalary": 15000}"#).unwrap();
        assert_eq!(s.base_salary, dec("15000"));
        assert_eq!(s.working_days_per_month, dec("30"));
        assert_eq!(s.cycle_month_anchor, CycleAnchor::End);
    }

    #[test]
    fn test_camel_case_interchange_names() {
        let s = Settings::default();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"baseSalary\""));
        assert!(json.contains("\"workingDaysPerMonth\""));
        assert!(json.contains("\"otMultipliers\""));
        assert!(json.contains("\"privacyHideMoney\""));
        assert!(json.contains("\"cycleMonthAnchor\":\"end\""));
        assert!(json.contains("\"otCycleMode\":\"custom\""));
        assert!(json.contains("\"otPayMode\":\"sameAsSalary\""));
    }

    #[test]
    fn test_multiplier_table_with_missing_entry() {
        let s: Settings =
            serde_json::from_str(r#"{"otMultipliers": {"normal": 1.5, "holiday": 3}}"#).unwrap();
        assert_eq!(s.ot_multipliers.get(&DayType::Special), None);
        assert_eq!(s.ot_multipliers[&DayType::Holiday], dec("3"));
    }

    #[test]
    fn test_effective_salary_end_day_defaults() {
        let mut s = Settings {
            salary_cycle_start_day: 1,
            salary_cycle_end_day: None,
            ..Default::default()
        };
        assert_eq!(s.effective_salary_end_day(), 0);

        s.salary_cycle_start_day = 21;
        assert_eq!(s.effective_salary_end_day(), 20);

        s.salary_cycle_end_day = Some(15);
        assert_eq!(s.effective_salary_end_day(), 15);
    }

    #[test]
    fn test_effective_ot_cycle_days_mirrors_salary() {
        let s = Settings {
            salary_cycle_start_day: 26,
            salary_cycle_end_day: Some(25),
            ot_cycle_mode: OtCycleMode::SameAsSalary,
            ot_cycle_start_day: 21,
            ot_cycle_end_day: Some(20),
            ..Default::default()
        };
        assert_eq!(s.effective_ot_cycle_days(), (26, 25));
    }

    #[test]
    fn test_effective_ot_cycle_days_custom() {
        let s = Settings::default();
        assert_eq!(s.effective_ot_cycle_days(), (21, 20));
    }

    #[test]
    fn test_prefill_record_from_night_template() {
        let settings = Settings::default();
        let record = settings.prefill_record("2026-02-03", Some(ShiftTag::Night));
        assert_eq!(record.date, "2026-02-03");
        assert_eq!(record.shift_type, ShiftTag::Night);
        assert_eq!(record.work_start.as_deref(), Some("20:00"));
        assert_eq!(record.work_end.as_deref(), Some("05:00"));
        assert_eq!(record.breaks.len(), 1);
    }

    #[test]
    fn test_prefill_record_unconfigured_template_is_empty() {
        let mut settings = Settings::default();
        settings.shift_templates.clear();
        let record = settings.prefill_record("2026-02-03", Some(ShiftTag::Day));
        assert!(record.work_start.is_none());
        assert!(record.breaks.is_empty());
    }

    #[test]
    fn test_settings_yaml_round_trip() {
        let s = Settings::default();
        let yaml = serde_yaml::to_string(&s).unwrap();
        let back: Settings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, s);
    }
}
