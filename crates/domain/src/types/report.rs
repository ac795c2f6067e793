//! Report value types
//!
//! Everything the reporting layer receives from a report run. All of it is
//! plain data with camelCase JSON field names.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::calls::{CallAggregate, CallRecord};
use super::filter::FilterCriteria;
use super::sort::{LeaveSortMode, SortDirection, SortSpec};
use super::utilization::UtilizationRecord;
use crate::constants::NO_PERFORMER;

/* -------------------------------------------------------------------------- */
/* Tables */
/* -------------------------------------------------------------------------- */

/// Average public utilization of one employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUtilization {
    pub name: String,
    /// Rounded to one decimal
    pub avg_public_pct: f64,
}

/// Hours spent in one task category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TaskCategoryHours {
    pub label: String,
    pub hours: f64,
}

/// Leave days of one employee by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct LeaveCounts {
    pub name: String,
    pub casual: u32,
    pub annual: u32,
    pub sick: u32,
}

impl LeaveCounts {
    pub fn total(&self) -> u32 {
        self.casual + self.annual + self.sick
    }
}

/* -------------------------------------------------------------------------- */
/* KPIs */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TopPerformer {
    pub name: String,
    pub score: f64,
}

impl Default for TopPerformer {
    fn default() -> Self {
        Self { name: NO_PERFORMER.to_string(), score: 0.0 }
    }
}

/// Headline numbers of a utilization report
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_employees: u32,
    pub avg_public_utilization: f64,
    pub total_hours: f64,
    pub top_performer: TopPerformer,
    pub monitoring_share_pct: f64,
    pub tasks_share_pct: f64,
}

/* -------------------------------------------------------------------------- */
/* Requests and reports */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct UtilizationReportRequest {
    pub filter: FilterCriteria,
    /// Ordering of the filtered records; input order when absent
    pub record_sort: Option<SortSpec>,
    pub leave_sort: LeaveSortMode,
    /// Ordering of the employee-average chart, by value
    pub averages_direction: SortDirection,
    /// Ordering of the task-hours chart, by value
    pub task_hours_direction: SortDirection,
}

impl Default for UtilizationReportRequest {
    fn default() -> Self {
        Self {
            filter: FilterCriteria::default(),
            record_sort: None,
            leave_sort: LeaveSortMode::default(),
            averages_direction: SortDirection::Desc,
            task_hours_direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct UtilizationReport {
    /// Filtered records
    pub records: Vec<UtilizationRecord>,
    /// Distinct employees of the unfiltered input, sorted, for pickers
    pub employees: Vec<String>,
    pub kpis: KpiSummary,
    pub employee_averages: Vec<EmployeeUtilization>,
    pub task_hours: Vec<TaskCategoryHours>,
    pub leave_counts: Vec<LeaveCounts>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct CallReportRequest {
    pub filter: FilterCriteria,
    /// Ordering of the aggregate table; first-seen order when absent
    pub sort: Option<SortSpec>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct CallReport {
    pub records: Vec<CallRecord>,
    /// Distinct non-empty monitors of the unfiltered input, sorted
    pub employees: Vec<String>,
    pub aggregates: Vec<CallAggregate>,
}
