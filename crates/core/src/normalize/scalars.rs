//! Scalar normalizers
//!
//! Total functions turning raw cells into canonical numbers, ISO dates and
//! minute durations. None of them fail: anything unrecognizable degrades to
//! `0` or an empty string.
//!
//! # Examples
//!
//! ```
//! use opsboard_core::normalize::scalars::*;
//! use opsboard_domain::CellValue;
//!
//! assert_eq!(to_number(&CellValue::from("1,250")), 1250.0);
//! assert_eq!(to_number(&CellValue::from("92%")), 92.0);
//! assert_eq!(parse_duration_to_minutes(&CellValue::from("1:30")), 1.5);
//! assert_eq!(ratio_to_percent(0.92), 92.0);
//! ```

use chrono::DateTime;
use lazy_static::lazy_static;
use opsboard_domain::constants::{
    MILLIS_PER_DAY, RATIO_PERCENT_CEILING, SPREADSHEET_EPOCH_OFFSET_DAYS,
};
use opsboard_domain::CellValue;
use regex::Regex;

lazy_static! {
    /// Leading `YYYY-MM-DD` of an ISO-ish date string
    static ref ISO_DATE_PREFIX: Regex = Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})")
        .expect("ISO_DATE_PREFIX should compile - this is a bug");
}

/// Numeric value of a cell, 0 when there is none
///
/// Text is trimmed, thousands separators are dropped and one trailing `%`
/// is ignored (`"92%"` is 92, not 0.92). Booleans count as 1/0.
pub fn to_number(value: &CellValue) -> f64 {
    match value {
        CellValue::Empty | CellValue::Date(_) => 0.0,
        CellValue::Bool(b) => f64::from(u8::from(*b)),
        CellValue::Number(n) => finite_or_zero(*n),
        CellValue::Text(s) => parse_numeric_text(s),
    }
}

fn parse_numeric_text(raw: &str) -> f64 {
    let cleaned = raw.trim().replace(',', "");
    let unsuffixed = cleaned.strip_suffix('%').unwrap_or(&cleaned).trim();
    if unsuffixed.is_empty() {
        return 0.0;
    }
    unsuffixed.parse::<f64>().map_or(0.0, finite_or_zero)
}

fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Canonical `YYYY-MM-DD` form of a date cell
///
/// Numbers are spreadsheet serial dates. Strings keep their leading ISO
/// date when they have one and are otherwise returned trimmed, so callers
/// can still see what the sheet said. Empty, zero and `false` give `""`.
pub fn normalize_date(value: &CellValue) -> String {
    match value {
        CellValue::Empty | CellValue::Bool(false) => String::new(),
        CellValue::Number(n) if *n == 0.0 || !n.is_finite() => String::new(),
        CellValue::Number(serial) => serial_to_iso_date(*serial).unwrap_or_default(),
        CellValue::Date(dt) => dt.format("%Y-%m-%d").to_string(),
        CellValue::Bool(true) | CellValue::Text(_) => {
            let text = value.as_text();
            let trimmed = text.trim();
            ISO_DATE_PREFIX
                .captures(trimmed)
                .and_then(|caps| caps.get(1))
                .map_or_else(|| trimmed.to_string(), |m| m.as_str().to_string())
        }
    }
}

fn serial_to_iso_date(serial: f64) -> Option<String> {
    let millis = ((serial - SPREADSHEET_EPOCH_OFFSET_DAYS) * MILLIS_PER_DAY).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
        .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
}

/// Minutes represented by a duration cell
///
/// Accepts plain minutes (`4.5`, `"4.5"`), `"mm:ss"` (or `"hh:mm"` when the
/// second part exceeds 59) and `"hh:mm:ss"`. Anything else is 0.
pub fn parse_duration_to_minutes(value: &CellValue) -> f64 {
    match value {
        CellValue::Number(n) => finite_or_zero(*n),
        CellValue::Text(s) => parse_duration_text(s),
        CellValue::Empty | CellValue::Bool(_) | CellValue::Date(_) => 0.0,
    }
}

fn parse_duration_text(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    if let Ok(minutes) = s.parse::<f64>() {
        if minutes.is_finite() {
            return minutes;
        }
    }

    let parts: Option<Vec<f64>> = s.split(':').map(duration_segment).collect();
    match parts.as_deref() {
        Some(&[a, b]) if b <= 59.0 => a + b / 60.0,
        Some(&[h, m]) => h * 60.0 + m,
        Some(&[h, m, sec]) => h * 60.0 + m + sec / 60.0,
        _ => 0.0,
    }
}

/// One `:`-separated piece; a blank piece counts as 0
fn duration_segment(part: &str) -> Option<f64> {
    let part = part.trim();
    if part.is_empty() {
        return Some(0.0);
    }
    part.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Percentage from a ratio that may already be a percentage
///
/// Values in `(0, 3]` are fractions or small multipliers and get scaled by
/// 100; anything else (including negatives) passes through.
pub fn ratio_to_percent(ratio: f64) -> f64 {
    if ratio > 0.0 && ratio <= RATIO_PERCENT_CEILING {
        ratio * 100.0
    } else {
        ratio
    }
}

/// Trimmed, lowercased shift label
pub fn normalize_shift(value: &CellValue) -> String {
    normalize_shift_label(&value.as_text())
}

pub fn normalize_shift_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Exact match of the normalized label against the leave vocabulary
pub fn is_leave_shift(label: &str, leave_shifts: &[String]) -> bool {
    let normalized = normalize_shift_label(label);
    leave_shifts.iter().any(|leave| *leave == normalized)
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

pub fn minutes_to_hours(minutes: f64) -> f64 {
    minutes / 60.0
}
