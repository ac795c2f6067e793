//! Filter criteria shared by utilization and call reports

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::ALL_EMPLOYEES;
use crate::impl_domain_label_conversions;

/// Named date range, resolved against "today" by the filter engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum DatePreset {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "last7days", alias = "7days")]
    LastSevenDays,
    #[serde(rename = "thisMonth")]
    ThisMonth,
    #[serde(rename = "lastMonth")]
    LastMonth,
    #[serde(rename = "custom")]
    Custom,
}

impl_domain_label_conversions!(DatePreset {
    All => "all",
    Today => "today",
    LastSevenDays => "last7days" | "7days",
    ThisMonth => "thisMonth",
    LastMonth => "lastMonth",
    Custom => "custom",
});

/// Closed calendar interval, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Start-of-day to end-of-day containment
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// What the reporting layer asks to see
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Exact employee name, or `"all"`
    pub employee: String,
    pub preset: DatePreset,
    /// Only consulted for [`DatePreset::Custom`]
    pub from: Option<NaiveDate>,
    /// Only consulted for [`DatePreset::Custom`]
    pub to: Option<NaiveDate>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self { employee: ALL_EMPLOYEES.to_string(), preset: DatePreset::All, from: None, to: None }
    }
}

impl FilterCriteria {
    pub fn for_employee(mut self, employee: impl Into<String>) -> Self {
        self.employee = employee.into();
        self
    }

    pub fn with_preset(mut self, preset: DatePreset) -> Self {
        self.preset = preset;
        self
    }

    /// Switches to [`DatePreset::Custom`] with explicit bounds
    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.preset = DatePreset::Custom;
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn is_all_employees(&self) -> bool {
        self.employee == ALL_EMPLOYEES
    }
}
