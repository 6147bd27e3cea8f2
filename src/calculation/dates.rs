//! Date-string utilities and calendar month arithmetic.
//!
//! Record dates travel as ISO `YYYY-MM-DD` strings; these helpers
//! normalize the accepted input shapes (ISO with or without zero padding,
//! and the `DD/MM/YYYY` form common in Thailand), produce a numeric key
//! for robust range comparisons, and do calendar-correct day-count math
//! via [`chrono`]. Formatting helpers pass malformed input through
//! unchanged instead of erroring.

use chrono::{Datelike, Local, NaiveDate};

/// Normalizes a date string into zero-padded ISO `YYYY-MM-DD` when
/// possible.
///
/// Accepts ISO with or without zero padding and `DD/MM/YYYY`. Anything
/// else is returned as-is (trimmed), best-effort.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::normalize_date_str;
///
/// assert_eq!(normalize_date_str("2026-2-3"), "2026-02-03");
/// assert_eq!(normalize_date_str("03/02/2026"), "2026-02-03");
/// assert_eq!(normalize_date_str("2026-02-03"), "2026-02-03");
/// assert_eq!(normalize_date_str("soon"), "soon");
/// ```
pub fn normalize_date_str(input: &str) -> String {
    let s = input.trim();
    if s.is_empty() {
        return String::new();
    }

    if let Some((y, m, d)) = split_numeric(s, '-')
        && y.len() == 4
    {
        return format!("{}-{:0>2}-{:0>2}", y, m, d);
    }

    // dd/mm/yyyy
    if let Some((d, m, y)) = split_numeric(s, '/')
        && y.len() == 4
    {
        return format!("{}-{:0>2}-{:0>2}", y, m, d);
    }

    s.to_string()
}

/// Splits `s` into three all-digit parts on `sep`, requiring the middle
/// and last parts to be 1–2 digits.
fn split_numeric(s: &str, sep: char) -> Option<(&str, &str, &str)> {
    let mut parts = s.split(sep);
    let a = parts.next()?;
    let b = parts.next()?;
    let c = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    for part in [a, b, c] {
        if part.is_empty() || !part.bytes().all(|x| x.is_ascii_digit()) {
            return None;
        }
    }
    if a.len() == 4 && b.len() <= 2 && c.len() <= 2 {
        return Some((a, b, c));
    }
    if a.len() <= 2 && b.len() <= 2 && c.len() == 4 {
        return Some((a, b, c));
    }
    None
}

/// Encodes a date string into a single comparable integer
/// `year * 10000 + month * 100 + day`.
///
/// Returns `None` when the input cannot be normalized to ISO shape. Range
/// filtering goes through this key rather than raw string comparison so
/// that mixed date formats still compare correctly.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::date_key;
///
/// assert_eq!(date_key("2026-02-03"), Some(20260203));
/// assert_eq!(date_key("03/02/2026"), Some(20260203));
/// assert_eq!(date_key("not a date"), None);
/// ```
pub fn date_key(date: &str) -> Option<i64> {
    let iso = normalize_date_str(date);
    let mut parts = iso.split('-');
    let y: i64 = parse_len(parts.next()?, 4)?;
    let m: i64 = parse_len(parts.next()?, 2)?;
    let d: i64 = parse_len(parts.next()?, 2)?;
    if parts.next().is_some() {
        return None;
    }
    Some(y * 10000 + m * 100 + d)
}

fn parse_len(part: &str, len: usize) -> Option<i64> {
    if part.len() != len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Returns the ISO date one day before the given date.
///
/// Used to turn an exclusive range end into the inclusive last day.
/// Malformed input is returned unchanged.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::prev_date;
///
/// assert_eq!(prev_date("2026-03-01"), "2026-02-28");
/// assert_eq!(prev_date("2028-03-01"), "2028-02-29"); // leap year
/// assert_eq!(prev_date("garbage"), "garbage");
/// ```
pub fn prev_date(date: &str) -> String {
    let iso = normalize_date_str(date);
    match NaiveDate::parse_from_str(&iso, "%Y-%m-%d").ok().and_then(|d| d.pred_opt()) {
        Some(prev) => iso_string(prev),
        None => date.to_string(),
    }
}

/// Number of days in the given month (1–12), leap-year aware.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map_or(30, |d| d.day())
}

/// Clamps a day-of-month into the valid range for the given month.
pub fn clamp_day(year: i32, month: u32, day: u32) -> u32 {
    day.clamp(1, days_in_month(year, month))
}

/// Shifts a `YYYY-MM` month value by a number of months.
///
/// An unparseable month falls back to the current system month before
/// shifting is applied... to the parsed value only; the fallback itself is
/// returned unshifted, matching "route to a default month" semantics.
///
/// # Examples
///
/// ```
/// use ot_engine::calculation::shift_month;
///
/// assert_eq!(shift_month("2026-02", -1), "2026-01");
/// assert_eq!(shift_month("2026-01", -1), "2025-12");
/// assert_eq!(shift_month("2025-11", 3), "2026-02");
/// ```
pub fn shift_month(yyyy_mm: &str, delta_months: i32) -> String {
    let Some((year, month)) = parse_month_value(yyyy_mm) else {
        return default_month_value();
    };
    let total = year * 12 + (month as i32 - 1) + delta_months;
    let y = total.div_euclid(12);
    let m = total.rem_euclid(12) as u32 + 1;
    format!("{:04}-{:02}", y, m)
}

/// Parses a `YYYY-MM` month selector into `(year, month)`.
pub fn parse_month_value(yyyy_mm: &str) -> Option<(i32, u32)> {
    let (y, m) = yyyy_mm.trim().split_once('-')?;
    let year: i32 = y.parse().ok()?;
    let month: u32 = m.parse().ok()?;
    if year <= 0 || !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month))
}

/// The current system month as a `YYYY-MM` value.
///
/// This is the only clock access in the engine; it is confined to the
/// fallback path for unparseable month selectors.
pub fn default_month_value() -> String {
    let today = Local::now().date_naive();
    format!("{:04}-{:02}", today.year(), today.month())
}

/// Formats a [`NaiveDate`] as zero-padded ISO.
pub(crate) fn iso_string(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}
