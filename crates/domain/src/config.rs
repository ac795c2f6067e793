//! Engine configuration
//!
//! [`EngineConfig`] is loaded once (see `opsboard-infra::config`) and handed
//! to the core services by reference. Every field has a default equal to the
//! values the source sheets were designed around, so a partial file only
//! needs to name what it changes.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{
    DATE_HEADER_TOKENS, DEFAULT_DAY_MINUTES, DEFAULT_LEAVE_SHIFTS, MAX_HEADER_COLUMNS,
    MAX_ROWS_PER_SHEET, NAME_HEADER_TOKENS, SHORT_CALL_THRESHOLD_MIN,
};
use crate::errors::{OpsBoardError, Result};
use crate::fields::{calls as cf, utilization as uf};
use crate::types::TaskKind;

/* -------------------------------------------------------------------------- */
/* Column aliases */
/* -------------------------------------------------------------------------- */

/// Canonical field name to the ordered list of column labels accepted for it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnAliasTable(HashMap<String, Vec<String>>);

impl ColumnAliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels for a canonical field, empty for unknown fields
    pub fn labels(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Builder-style replacement of one field's labels
    pub fn with_aliases<I, S>(mut self, field: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.insert(field.into(), labels.into_iter().map(Into::into).collect());
        self
    }

    /// Fields listed in `overrides` replace ours wholesale; the rest stay
    pub fn merged(mut self, overrides: HashMap<String, Vec<String>>) -> Self {
        self.0.extend(overrides);
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Every label the utilization sheets are known to use
    pub fn utilization_defaults() -> Self {
        Self::new()
            .with_aliases(uf::DATE, ["تاريخ باليوم", "Date", "التاريخ"])
            .with_aliases(uf::SHIFT, ["الشيفت", "Shift"])
            .with_aliases(uf::EMPLOYEE, ["اسم الموظف", "Name"])
            .with_aliases(uf::FULL_DAY_TRAINING, ["Full Day Training", "Training", "Full training"])
            .with_aliases(
                uf::VOICE_WHATSAPP,
                ["Voice - What's App", "Voice - WhatsApp", "Voice & WhatsApp"],
            )
            .with_aliases(
                uf::ADB_RETENTION_OMU,
                ["ADB , Retention , OMU and Social Media", "ADB & Social"],
            )
            .with_aliases(uf::VIP, ["VIP"])
            .with_aliases(uf::COMPLAINT, ["Complaint", "Complaints"])
            .with_aliases(uf::APPLICATION, ["Application"])
            .with_aliases(
                uf::MYSTERY_CALLS,
                ["Mysetry Calls", "Mystery Calls", "Mysetry Chats", "Mystery Chats"],
            )
            .with_aliases(
                uf::ADB_TRANSACTION,
                ["ADB Transcation", "ADB Transaction", "Transactions"],
            )
            .with_aliases(uf::COACHING, ["Coaching"])
            .with_aliases(uf::OTHER_TASKS, ["Other Tasks (Min)", "Other Tasks Minutes"])
            .with_aliases(
                uf::OTHER_TASKS_COMMENT,
                [
                    "Other Tasks Clarificatoin or other comments",
                    "Other Tasks Clarification or other comments",
                    "Other Tasks Clarificatoin",
                ],
            )
            .with_aliases(uf::PAID_DAY, ["paid day", "Paid Day", "Paid day"])
            .with_aliases(uf::BUSINESS_DAY, ["Business day", "Business Day"])
            .with_aliases(uf::ADHOC, ["Ad-Hoc", "Adhoc", "ADHOC"])
            .with_aliases(uf::ACTUAL_MONITORING_TIME, minute_column_variants("Actual Monitoring"))
            .with_aliases(uf::ACTUAL_TASKS_TIME, minute_column_variants("Actual Tasks"))
            .with_aliases(uf::OVERALL_ACTUAL_TIME, minute_column_variants("Overall Actual"))
            .with_aliases(uf::ACCURACY, ["Acurracy", "Accuracy"])
            .with_aliases(
                uf::INTERNAL_UTILIZATION,
                ["intrenal utilization", "internal utilization", "Internal utilization"],
            )
            .with_aliases(uf::PUBLIC_UTILIZATION, ["Public Utilization", "public utilization"])
    }

    /// Every label the call-monitoring logs are known to use
    pub fn call_defaults() -> Self {
        Self::new()
            .with_aliases(
                cf::MONITORED_BY,
                ["Monitored By", "monitored by", "Monitor By", "MonitoredBy"],
            )
            .with_aliases(
                cf::DURATION,
                ["Duration", "duration", "Call Duration", "Talk Time", "CallDuration"],
            )
            .with_aliases(cf::CALL_DATE, ["Call Date", "call date", "Date", "date", "CallDate"])
    }
}

/// `"<stem> time"`, `"<stem> Time"` and each of their unit suffixes
fn minute_column_variants(stem: &str) -> Vec<String> {
    ["", " (Min)", " (min)", " (Minutes)", " (Min.)"]
        .iter()
        .flat_map(|suffix| [format!("{stem} time{suffix}"), format!("{stem} Time{suffix}")])
        .collect()
}

fn utilization_aliases_over_defaults<'de, D>(
    deserializer: D,
) -> std::result::Result<ColumnAliasTable, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = HashMap::<String, Vec<String>>::deserialize(deserializer)?;
    Ok(ColumnAliasTable::utilization_defaults().merged(overrides))
}

fn call_aliases_over_defaults<'de, D>(
    deserializer: D,
) -> std::result::Result<ColumnAliasTable, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = HashMap::<String, Vec<String>>::deserialize(deserializer)?;
    Ok(ColumnAliasTable::call_defaults().merged(overrides))
}

/* -------------------------------------------------------------------------- */
/* Task weights */
/* -------------------------------------------------------------------------- */

/// Minutes credited per unit of each task kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskWeights {
    pub voice_whatsapp: f64,
    pub adb_retention_omu: f64,
    pub vip: f64,
    pub complaint: f64,
    pub application: f64,
    pub mystery_calls: f64,
    pub adb_transaction: f64,
    pub coaching: f64,
}

impl Default for TaskWeights {
    fn default() -> Self {
        Self {
            voice_whatsapp: 15.0,
            adb_retention_omu: 10.0,
            vip: 30.0,
            complaint: 30.0,
            application: 15.0,
            mystery_calls: 12.0,
            adb_transaction: 45.0,
            coaching: 10.0,
        }
    }
}

impl TaskWeights {
    pub fn weight(&self, kind: TaskKind) -> f64 {
        match kind {
            TaskKind::VoiceWhatsapp => self.voice_whatsapp,
            TaskKind::AdbRetentionOmu => self.adb_retention_omu,
            TaskKind::Vip => self.vip,
            TaskKind::Complaint => self.complaint,
            TaskKind::Application => self.application,
            TaskKind::MysteryCalls => self.mystery_calls,
            TaskKind::AdbTransaction => self.adb_transaction,
            TaskKind::Coaching => self.coaching,
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Sheet gate */
/* -------------------------------------------------------------------------- */

/// Header tokens a utilization sheet must mention to be ingested
///
/// A sheet qualifies when its lowercased header line contains at least one
/// date token and at least one name token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetGate {
    pub date_tokens: Vec<String>,
    pub name_tokens: Vec<String>,
}

impl Default for SheetGate {
    fn default() -> Self {
        Self {
            date_tokens: DATE_HEADER_TOKENS.iter().map(ToString::to_string).collect(),
            name_tokens: NAME_HEADER_TOKENS.iter().map(ToString::to_string).collect(),
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Engine config */
/* -------------------------------------------------------------------------- */

/// Everything the normalization and aggregation engine reads at runtime
///
/// Alias tables given in a config file are merged over the built-in ones
/// field by field, so a file can add a label for one column without
/// restating the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    #[serde(deserialize_with = "utilization_aliases_over_defaults")]
    pub utilization_aliases: ColumnAliasTable,
    #[serde(deserialize_with = "call_aliases_over_defaults")]
    pub call_aliases: ColumnAliasTable,
    pub default_day_minutes: f64,
    /// Valid calls at or below this many minutes count as short
    pub short_call_threshold_minutes: f64,
    pub task_weights: TaskWeights,
    /// Lowercased shift labels that mark a leave day
    pub leave_shifts: Vec<String>,
    pub sheet_gate: SheetGate,
    pub max_rows_per_sheet: usize,
    pub max_header_columns: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            utilization_aliases: ColumnAliasTable::utilization_defaults(),
            call_aliases: ColumnAliasTable::call_defaults(),
            default_day_minutes: DEFAULT_DAY_MINUTES,
            short_call_threshold_minutes: SHORT_CALL_THRESHOLD_MIN,
            task_weights: TaskWeights::default(),
            leave_shifts: DEFAULT_LEAVE_SHIFTS.iter().map(ToString::to_string).collect(),
            sheet_gate: SheetGate::default(),
            max_rows_per_sheet: MAX_ROWS_PER_SHEET,
            max_header_columns: MAX_HEADER_COLUMNS,
        }
    }
}

impl EngineConfig {
    /// Rejects values the engine cannot work with
    ///
    /// # Errors
    /// Returns `OpsBoardError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.default_day_minutes.is_finite() || self.default_day_minutes <= 0.0 {
            return Err(OpsBoardError::Config(format!(
                "default_day_minutes must be positive, got {}",
                self.default_day_minutes
            )));
        }
        if !self.short_call_threshold_minutes.is_finite() || self.short_call_threshold_minutes < 0.0
        {
            return Err(OpsBoardError::Config(format!(
                "short_call_threshold_minutes must be non-negative, got {}",
                self.short_call_threshold_minutes
            )));
        }
        if let Some(kind) = TaskKind::ALL.into_iter().find(|kind| {
            let weight = self.task_weights.weight(*kind);
            !weight.is_finite() || weight < 0.0
        }) {
            return Err(OpsBoardError::Config(format!(
                "task weight for {} must be non-negative",
                kind.field()
            )));
        }
        if self.max_rows_per_sheet == 0 || self.max_header_columns == 0 {
            return Err(OpsBoardError::Config("ingestion limits must be at least 1".to_string()));
        }
        Ok(())
    }
}
