//! Daily attendance record model and related types.
//!
//! This module defines the [`DayRecord`] struct and its tag enums. The tag
//! enums are closed sets, but they parse permissively: an unrecognized
//! attendance or day-type string falls back to the default variant instead
//! of failing, because these values originate from hand-entered data files.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Whether a day was worked, absent, or on leave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    /// Worked the day (the default for any unrecognized tag).
    #[default]
    Present,
    /// Day off / absent. No hours, no pay.
    Off,
    /// Personal leave. Paid at the daily rate.
    Personal,
    /// Sick leave. Paid at the daily rate.
    Sick,
}

impl Attendance {
    /// Parses an attendance tag, falling back to [`Attendance::Present`]
    /// for anything unrecognized.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "off" => Attendance::Off,
            "personal" => Attendance::Personal,
            "sick" => Attendance::Sick,
            _ => Attendance::Present,
        }
    }
}

impl<'de> Deserialize<'de> for Attendance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Attendance::from_tag(&tag))
    }
}

/// Day classification selecting which multiplier row applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// Ordinary working day (the default for any unrecognized tag).
    #[default]
    Normal,
    /// Public or company holiday.
    Holiday,
    /// Special day with its own multiplier row.
    Special,
}

impl DayType {
    /// Parses a day-type tag, falling back to [`DayType::Normal`]
    /// for anything unrecognized.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "holiday" => DayType::Holiday,
            "special" => DayType::Special,
            _ => DayType::Normal,
        }
    }
}

impl<'de> Deserialize<'de> for DayType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(DayType::from_tag(&tag))
    }
}

/// Shift tag used for template prefill and shift-allowance lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftTag {
    /// Day shift.
    #[default]
    Day,
    /// Night shift (typically crosses midnight).
    Night,
    /// User-defined shift.
    Custom,
}

impl ShiftTag {
    /// Parses a shift tag, mapping anything unrecognized to
    /// [`ShiftTag::Custom`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "day" => ShiftTag::Day,
            "night" => ShiftTag::Night,
            _ => ShiftTag::Custom,
        }
    }
}

impl<'de> Deserialize<'de> for ShiftTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ShiftTag::from_tag(&tag))
    }
}

/// One break interval as entered by the user, `HH:MM` strings.
///
/// Unparseable or missing endpoints cause the break to be dropped during
/// normalization rather than reported as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakSpec {
    /// Break start, `HH:MM`.
    #[serde(default)]
    pub start: Option<String>,
    /// Break end, `HH:MM`. May be earlier than start for a break that
    /// crosses midnight.
    #[serde(default)]
    pub end: Option<String>,
}

impl BreakSpec {
    /// Builds a break from two `HH:MM` strings.
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }
}

/// Derived net hour totals for one record.
///
/// This is a cache: it is always reproducible from `(record, settings)` and
/// is never trusted as input — calculations recompute it on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetHours {
    /// Net worked minutes after break subtraction.
    pub work_minutes_net: i64,
    /// Net overtime minutes after break subtraction.
    pub ot_minutes_net: i64,
    /// `work_minutes_net + ot_minutes_net`.
    pub total_minutes_net: i64,
    /// Net worked hours, rounded to 2 decimals.
    pub work_hours_net: Decimal,
    /// Net overtime hours, rounded to 2 decimals.
    pub ot_hours_net: Decimal,
    /// Net total hours, rounded to 2 decimals.
    pub total_hours_net: Decimal,
}

impl NetHours {
    /// An all-zero result.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// One attendance record per calendar date.
///
/// The `date` is the immutable identity key, ISO `YYYY-MM-DD`. All other
/// fields are user-entered and may be missing or malformed; calculations
/// degrade such fields to "unset" rather than erroring.
///
/// # Example
///
/// ```
/// use ot_engine::models::{Attendance, BreakSpec, DayRecord, DayType};
///
/// let record = DayRecord {
///     date: "2026-02-03".to_string(),
///     attendance: Attendance::Present,
///     day_type: DayType::Normal,
///     work_start: Some("08:00".to_string()),
///     work_end: Some("17:00".to_string()),
///     breaks: vec![BreakSpec::new("12:00", "13:00")],
///     ..Default::default()
/// };
/// assert_eq!(record.date, "2026-02-03");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayRecord {
    /// ISO `YYYY-MM-DD` date, the record's identity.
    pub date: String,
    /// Attendance category for the day.
    pub attendance: Attendance,
    /// Day classification selecting the multiplier row.
    pub day_type: DayType,
    /// Shift tag, informational plus shift-allowance lookup.
    pub shift_type: ShiftTag,
    /// Work window start, `HH:MM`.
    pub work_start: Option<String>,
    /// Work window end, `HH:MM`. Earlier than start means cross-midnight.
    pub work_end: Option<String>,
    /// Overtime window start, `HH:MM`.
    pub ot_start: Option<String>,
    /// Overtime window end, `HH:MM`.
    pub ot_end: Option<String>,
    /// Break intervals; normalized and merged before use.
    pub breaks: Vec<BreakSpec>,
    /// Whether the manual OT multiplier override is active.
    pub ot_multiplier_manual_enabled: bool,
    /// Manual OT multiplier; only applied when enabled and greater than
    /// zero. Tolerates an empty string in interchange data.
    #[serde(deserialize_with = "lenient_decimal_opt")]
    pub ot_multiplier_manual: Option<Decimal>,
    /// Manual per-day allowance.
    pub allowances_day: Decimal,
    /// Manual per-day deduction.
    pub deductions_day: Decimal,
    /// Per-day override of the automatic shift allowance; `None` means
    /// "use automatic".
    #[serde(deserialize_with = "lenient_decimal_opt")]
    pub shift_allowance_override: Option<Decimal>,
    /// Free-form labels.
    pub tags: Vec<String>,
    /// Free-form note.
    pub note: String,
    /// Set on first save.
    pub created_at: Option<DateTime<Utc>>,
    /// Set on every save.
    pub updated_at: Option<DateTime<Utc>>,
    /// Cached derived hours; recomputed whenever the record or the
    /// relevant settings change, never authoritative.
    pub computed: Option<NetHours>,
}

impl DayRecord {
    /// Returns the effective manual OT multiplier, if the override is
    /// enabled and its value is greater than zero.
    pub fn manual_ot_multiplier(&self) -> Option<Decimal> {
        if !self.ot_multiplier_manual_enabled {
            return None;
        }
        self.ot_multiplier_manual
            .filter(|m| *m > Decimal::ZERO)
    }
}

/// Deserializes an optional Decimal, additionally treating an empty or
/// unparseable string as `None`. Interchange files from the original app
/// store `""` for an unset manual multiplier.
fn lenient_decimal_opt<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Decimal>, D::Error> {
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(Decimal),
        Text(String),
        Nothing(()),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(d)) => Some(d),
        Some(Raw::Text(s)) => Decimal::from_str(s.trim()).ok(),
        Some(Raw::Nothing(())) | None => None,
    })
}
