//! CSV rendering of per-day rows and range summaries.
//!
//! Produces the text of a CSV export; writing it anywhere is the
//! caller's concern. Money columns honor the `privacyHideMoney` setting:
//! amounts are still computed, but render as `***`.

use rust_decimal::Decimal;

use crate::calculation::{compute_day_money, compute_net_hours};
use crate::config::Settings;
use crate::models::{Attendance, DayRecord, DayType, RangeSummary, ShiftTag};

const DAY_HEADER: &[&str] = &[
    "date",
    "attendance",
    "dayType",
    "shiftType",
    "workHours",
    "otHours",
    "totalHours",
    "hourlyRate",
    "workMultiplier",
    "otMultiplier",
    "normalPay",
    "otPay",
    "allowancesDay",
    "deductionsDay",
    "grossDay",
    "employeeId",
    "department",
    "note",
    "tags",
    "createdAt",
    "updatedAt",
];

/// Renders one CSV row per record, preceded by a header row.
///
/// Hours and money come straight from the engine's computed outputs,
/// never from the record's cache.
///
/// # Examples
///
/// ```
/// use ot_engine::config::Settings;
/// use ot_engine::models::DayRecord;
/// use ot_engine::report::render_records_csv;
///
/// let records = vec![DayRecord {
///     date: "2026-02-03".to_string(),
///     work_start: Some("08:00".to_string()),
///     work_end: Some("17:00".to_string()),
///     ..Default::default()
/// }];
/// let csv = render_records_csv(&records, &Settings::default());
/// assert!(csv.starts_with("date,attendance,dayType"));
/// assert!(csv.lines().nth(1).unwrap().starts_with("2026-02-03,present,normal,day,9,"));
/// ```
pub fn render_records_csv(records: &[DayRecord], settings: &Settings) -> String {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(DAY_HEADER.join(","));

    for record in records {
        let hours = compute_net_hours(record, settings);
        let money = compute_day_money(record, settings);

        rows.push(
            [
                esc(&record.date),
                attendance_tag(record.attendance).to_string(),
                day_type_tag(record.day_type).to_string(),
                shift_tag(record.shift_type).to_string(),
                hours.work_hours_net.normalize().to_string(),
                hours.ot_hours_net.normalize().to_string(),
                hours.total_hours_net.normalize().to_string(),
                amount(settings, money.rates.hourly_rate),
                money.work_multiplier.normalize().to_string(),
                money.ot_multiplier.normalize().to_string(),
                amount(settings, money.normal_pay),
                amount(settings, money.ot_pay),
                amount(settings, money.allowances_day),
                amount(settings, money.deductions_day),
                amount(settings, money.gross_day),
                esc(&settings.employee_id),
                esc(&settings.department),
                esc(&record.note),
                esc(&record.tags.join("|")),
                esc(&record.created_at.map(|t| t.to_rfc3339()).unwrap_or_default()),
                esc(&record.updated_at.map(|t| t.to_rfc3339()).unwrap_or_default()),
            ]
            .join(","),
        );
    }

    rows.join("\n")
}

/// Renders a range summary as `key,value` lines.
pub fn render_summary_csv(summary: &RangeSummary, settings: &Settings) -> String {
    let rows = [
        ("dateFrom".to_string(), esc(&summary.date_from)),
        (
            "dateToExclusive".to_string(),
            esc(&summary.date_to_exclusive),
        ),
        ("daysPresent".to_string(), summary.days_present.to_string()),
        ("daysOff".to_string(), summary.days_off.to_string()),
        ("daysPersonal".to_string(), summary.days_personal.to_string()),
        ("daysSick".to_string(), summary.days_sick.to_string()),
        ("daysPaid".to_string(), summary.days_paid.to_string()),
        (
            "workHours".to_string(),
            summary.work_hours.normalize().to_string(),
        ),
        (
            "otHours".to_string(),
            summary.ot_hours.normalize().to_string(),
        ),
        ("normalPay".to_string(), amount(settings, summary.normal_pay)),
        ("otPay".to_string(), amount(settings, summary.ot_pay)),
        ("allowances".to_string(), amount(settings, summary.allowances)),
        ("deductions".to_string(), amount(settings, summary.deductions)),
        ("gross".to_string(), amount(settings, summary.gross)),
    ];

    rows.iter()
        .map(|(key, value)| format!("{},{}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn attendance_tag(attendance: Attendance) -> &'static str {
    match attendance {
        Attendance::Present => "present",
        Attendance::Off => "off",
        Attendance::Personal => "personal",
        Attendance::Sick => "sick",
    }
}

fn day_type_tag(day_type: DayType) -> &'static str {
    match day_type {
        DayType::Normal => "normal",
        DayType::Holiday => "holiday",
        DayType::Special => "special",
    }
}

fn shift_tag(shift: ShiftTag) -> &'static str {
    match shift {
        ShiftTag::Day => "day",
        ShiftTag::Night => "night",
        ShiftTag::Custom => "custom",
    }
}

/// Formats a money value, masked when the privacy flag is set.
fn amount(settings: &Settings, value: Decimal) -> String {
    if settings.privacy_hide_money {
        "***".to_string()
    } else {
        value.normalize().to_string()
    }
}

/// Quotes a CSV field when it contains a quote, comma, or newline.
fn esc(field: &str) -> String {
    if field.contains(['"', ',', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
