//! Header gate for utilization sheets
//!
//! Workbooks often carry summary or pivot sheets next to the daily ones.
//! A sheet only counts as a daily utilization sheet when its header row
//! mentions both a date and an employee name.

use opsboard_domain::SheetGate;

/// Whether `headers` look like a daily utilization sheet
///
/// Only the first `max_columns` headers are inspected. They are joined with
/// spaces and lowercased, then searched for any date token and any name
/// token.
pub fn is_utilization_sheet(headers: &[String], gate: &SheetGate, max_columns: usize) -> bool {
    let text = headers
        .iter()
        .take(max_columns)
        .map(|h| h.trim())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mentions = |tokens: &[String]| {
        tokens.iter().any(|token| !token.is_empty() && text.contains(&token.to_lowercase()))
    };
    mentions(&gate.date_tokens) && mentions(&gate.name_tokens)
}
