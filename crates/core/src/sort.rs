//! Table sorting
//!
//! Every report table sorts through [`Sortable`]: a row hands out a
//! [`SortValue`] for a named column and [`sort_by_spec`] orders rows by it.
//! Sorting is stable, so rows that compare equal keep their input order.
//!
//! # Comparison rules
//! - two numbers compare with [`f64::total_cmp`]
//! - anything else compares as text with [`locale_compare`]
//! - a key the row does not know compares equal

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::NaiveDate;
use opsboard_domain::{
    CallAggregate, CallRecord, EmployeeUtilization, LeaveCounts, LeaveSortMode, SortDirection,
    SortSpec, TaskCategoryHours, TaskKind, UtilizationRecord,
};

use crate::filter::parse_record_date;

/// Value of one sortable column
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Number(f64),
    Text(Cow<'a, str>),
}

impl<'a> SortValue<'a> {
    pub fn text(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }

    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s.as_ref()),
        }
    }
}

impl From<f64> for SortValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for SortValue<'_> {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Rows that can be ordered by a named column
pub trait Sortable {
    /// Value of column `key`, `None` for unknown columns
    fn sort_value(&self, key: &str) -> Option<SortValue<'_>>;
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        (**self).sort_value(key)
    }
}

/* -------------------------------------------------------------------------- */
/* Comparison */
/* -------------------------------------------------------------------------- */

/// Case-insensitive text order; strings differing only in case put the
/// lowercase form first
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}

fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => x.total_cmp(y),
        _ => locale_compare(&a.as_text(), &b.as_text()),
    }
}

/// Ascending comparison of two rows on `key`
pub fn compare_by_key<T: Sortable + ?Sized>(a: &T, b: &T, key: &str) -> Ordering {
    match (a.sort_value(key), b.sort_value(key)) {
        (Some(x), Some(y)) => compare_values(&x, &y),
        _ => Ordering::Equal,
    }
}

/// Stable sort of `rows` by `spec`
pub fn sort_by_spec<T: Sortable>(rows: &mut [T], spec: &SortSpec) {
    rows.sort_by(|a, b| directed(compare_by_key(a, b, &spec.key), spec.direction));
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Orders the leave table
pub fn sort_leave_counts(rows: &mut [LeaveCounts], mode: LeaveSortMode) {
    match mode {
        LeaveSortMode::TotalDesc => rows.sort_by(|a, b| b.total().cmp(&a.total())),
        LeaveSortMode::TotalAsc => rows.sort_by_key(LeaveCounts::total),
        LeaveSortMode::NameAsc => rows.sort_by(|a, b| locale_compare(&a.name, &b.name)),
        LeaveSortMode::NameDesc => rows.sort_by(|a, b| locale_compare(&b.name, &a.name)),
    }
}

/* -------------------------------------------------------------------------- */
/* Row impls */
/* -------------------------------------------------------------------------- */

/// Days since 1970-01-01; an empty date sorts as the epoch and an
/// unreadable one before every readable date
fn date_sort_value(date: &str) -> SortValue<'static> {
    if date.trim().is_empty() {
        return SortValue::Number(0.0);
    }
    let days = parse_record_date(date).map_or(f64::NEG_INFINITY, |d| {
        let epoch = NaiveDate::default();
        (d - epoch).num_days() as f64
    });
    SortValue::Number(days)
}

impl Sortable for UtilizationRecord {
    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        let value = match key {
            "date" => date_sort_value(&self.date),
            "employee" => SortValue::text(&self.employee),
            "shift" => SortValue::text(&self.shift),
            "sheetName" => SortValue::text(&self.sheet_name),
            "status" => SortValue::Text(Cow::Owned(self.status.to_string())),
            "fullDayTraining" => f64::from(u8::from(self.full_day_training)).into(),
            "otherTasksComment" => SortValue::text(&self.other_tasks_comment),
            "otherTasks" | "otherTasksMinutes" => self.other_tasks_minutes.into(),
            "paidDay" | "paidDayMinutes" => self.paid_day_minutes.into(),
            "businessDay" | "businessDayMinutes" => self.business_day_minutes.into(),
            "adhoc" | "adhocMinutes" => self.adhoc_minutes.into(),
            "actualMonitoring" | "actualMonitoringMinutes" => {
                self.actual_monitoring_minutes.into()
            }
            "actualTasks" | "actualTasksMinutes" => self.actual_tasks_minutes.into(),
            "overallActual" | "overallActualMinutes" => self.overall_actual_minutes.into(),
            "accuracyPct" => self.accuracy_pct.into(),
            "internalPct" | "internalUtilizationPct" => self.internal_utilization_pct.into(),
            "publicPct" | "publicUtilizationPct" => self.public_utilization_pct.into(),
            "monitoringSharePct" => self.monitoring_share_pct.into(),
            "tasksSharePct" => self.tasks_share_pct.into(),
            other => TaskKind::from_field(other).map(|kind| self.task_count(kind))?.into(),
        };
        Some(value)
    }
}

impl Sortable for CallAggregate {
    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        let value = match key {
            "name" => SortValue::text(&self.name),
            "totalCalls" => self.total_calls.into(),
            "validCalls" => self.valid_calls.into(),
            "avgDurationMin" => self.avg_duration_min.into(),
            "totalDurationMin" | "totalDurationMinutes" => self.total_duration_minutes.into(),
            "totalDurationHours" => self.total_duration_hours.into(),
            "shortCalls" => self.short_calls.into(),
            "shortPct" => self.short_pct.into(),
            "gt10" => self.gt10.into(),
            "g13" | "g1to3" => self.g1to3.into(),
            "g46" | "g4to6" => self.g4to6.into(),
            "g710" | "g7to10" => self.g7to10.into(),
            other => {
                let minute = other.strip_prefix('m')?.parse::<usize>().ok()?;
                if !(1..=self.minute_buckets.len()).contains(&minute) {
                    return None;
                }
                self.bucket(minute).into()
            }
        };
        Some(value)
    }
}

impl Sortable for CallRecord {
    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        let value = match key {
            "monitoredBy" | "name" | "employee" => SortValue::text(&self.monitored_by),
            "durationMinutes" | "durationMin" => self.duration_minutes.into(),
            "callDate" | "date" => date_sort_value(&self.call_date),
            "rawDuration" => SortValue::text(&self.raw_duration),
            "sheetName" => SortValue::text(&self.sheet_name),
            _ => return None,
        };
        Some(value)
    }
}

impl Sortable for EmployeeUtilization {
    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        match key {
            "name" => Some(SortValue::text(&self.name)),
            "avgPublicPct" => Some(self.avg_public_pct.into()),
            _ => None,
        }
    }
}

impl Sortable for TaskCategoryHours {
    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        match key {
            "label" | "name" => Some(SortValue::text(&self.label)),
            "hours" => Some(self.hours.into()),
            _ => None,
        }
    }
}

impl Sortable for LeaveCounts {
    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        match key {
            "name" => Some(SortValue::text(&self.name)),
            "casual" => Some(self.casual.into()),
            "annual" => Some(self.annual.into()),
            "sick" => Some(self.sick.into()),
            "total" => Some(self.total().into()),
            _ => None,
        }
    }
}
