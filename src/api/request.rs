//! Request types for the payroll engine API.
//!
//! Requests carry full snapshots: the records to compute over and,
//! optionally, a settings object that overrides the startup snapshot for
//! that call. Field names are camelCase to match the interchange format.

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::models::DayRecord;

/// Which cycle a month-based summary is aggregated over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// The salary cycle.
    #[default]
    Salary,
    /// The OT cycle.
    Ot,
}

/// Request body for `POST /records/compute`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRequest {
    /// Optional settings override for this call.
    #[serde(default)]
    pub settings: Option<Settings>,
    /// The records to compute.
    pub records: Vec<DayRecord>,
}

/// Request body for `POST /summary`.
///
/// Either an explicit `dateFrom`/`dateToExclusive` pair or a
/// `month` (+ optional `period`) must be provided; the month form
/// resolves the date window through the cycle resolver first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryRequest {
    /// Optional settings override for this call.
    pub settings: Option<Settings>,
    /// The records to aggregate.
    pub records: Vec<DayRecord>,
    /// Inclusive range start, ISO date.
    pub date_from: Option<String>,
    /// Exclusive range end, ISO date.
    pub date_to_exclusive: Option<String>,
    /// Selected `YYYY-MM` month, resolved via the cycle settings.
    pub month: Option<String>,
    /// Which cycle the month selects; defaults to salary.
    pub period: Option<PeriodKind>,
}

/// Request body for `POST /cycles/resolve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclesRequest {
    /// Optional settings override for this call.
    #[serde(default)]
    pub settings: Option<Settings>,
    /// Selected `YYYY-MM` month.
    pub month: String,
}
