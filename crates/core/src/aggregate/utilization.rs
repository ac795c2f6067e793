//! Utilization aggregates: per-employee averages, task hours, leave days
//! and the KPI summary

use ahash::AHashSet as HashSet;
use opsboard_domain::constants::{NO_PERFORMER, OTHER_TASKS_LABEL};
use opsboard_domain::{
    EmployeeUtilization, KpiSummary, LeaveCounts, TaskCategoryHours, TaskKind, TopPerformer,
    UtilizationRecord,
};

use super::grouping::{Accumulator, OrderedGroups};
use crate::normalize::scalars::{minutes_to_hours, normalize_shift_label, round_to};

/* -------------------------------------------------------------------------- */
/* Accumulators */
/* -------------------------------------------------------------------------- */

/// Running sum of public utilization for one employee
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PublicPctTotals {
    pub sum: f64,
    pub count: u32,
}

impl PublicPctTotals {
    pub fn from_record(record: &UtilizationRecord) -> Self {
        Self { sum: record.public_utilization_pct, count: 1 }
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / f64::from(self.count)
        }
    }
}

impl Accumulator for PublicPctTotals {
    fn merge(&mut self, other: Self) {
        self.sum += other.sum;
        self.count += other.count;
    }
}

/// Minutes booked against one task category
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MinuteTotal(pub f64);

impl Accumulator for MinuteTotal {
    fn merge(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Leave days by category for one employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaveTally {
    pub casual: u32,
    pub annual: u32,
    pub sick: u32,
}

impl LeaveTally {
    pub fn from_shift(shift: &str) -> Self {
        let mut tally = Self::default();
        match normalize_shift_label(shift).as_str() {
            "casual" => tally.casual = 1,
            "annual" => tally.annual = 1,
            "sick" => tally.sick = 1,
            _ => {}
        }
        tally
    }

    pub fn total(&self) -> u32 {
        self.casual + self.annual + self.sick
    }
}

impl Accumulator for LeaveTally {
    fn merge(&mut self, other: Self) {
        self.casual += other.casual;
        self.annual += other.annual;
        self.sick += other.sick;
    }
}

/* -------------------------------------------------------------------------- */
/* Employee averages */
/* -------------------------------------------------------------------------- */

/// Public utilization totals per employee over records with a paid day
pub fn public_pct_by_employee(records: &[UtilizationRecord]) -> OrderedGroups<PublicPctTotals> {
    records
        .iter()
        .filter(|r| r.paid_day_minutes > 0.0 && !r.employee.is_empty())
        .map(|r| (r.employee.as_str(), PublicPctTotals::from_record(r)))
        .collect()
}

/// Average public utilization per employee, first-seen order, one decimal
pub fn employee_averages(records: &[UtilizationRecord]) -> Vec<EmployeeUtilization> {
    public_pct_by_employee(records)
        .iter()
        .map(|(name, totals)| EmployeeUtilization {
            name: name.to_string(),
            avg_public_pct: round_to(totals.mean(), 1),
        })
        .collect()
}

/// Employee with the highest average; the first one wins exact ties
///
/// Averages must be strictly positive to count, so an empty or all-zero
/// input reports `"-"` with a score of 0.
pub fn top_performer(records: &[UtilizationRecord]) -> TopPerformer {
    select_top_performer(&public_pct_by_employee(records))
}

fn select_top_performer(groups: &OrderedGroups<PublicPctTotals>) -> TopPerformer {
    let (name, score) = groups.iter().fold((NO_PERFORMER, 0.0_f64), |best, (name, totals)| {
        let avg = totals.mean();
        if avg > best.1 {
            (name, avg)
        } else {
            best
        }
    });
    TopPerformer { name: name.to_string(), score: round_to(score, 1) }
}

/* -------------------------------------------------------------------------- */
/* Task hours */
/* -------------------------------------------------------------------------- */

/// Hours per task category over non-leave records
///
/// Always lists the eight task kinds followed by "Other Tasks (Min)", even
/// when every total is zero.
pub fn task_category_hours(records: &[UtilizationRecord]) -> Vec<TaskCategoryHours> {
    let seeded = TaskKind::ALL
        .iter()
        .map(|kind| (kind.label(), MinuteTotal::default()))
        .chain(std::iter::once((OTHER_TASKS_LABEL, MinuteTotal::default())));
    let mut groups: OrderedGroups<MinuteTotal> = seeded.collect();

    for record in records.iter().filter(|r| !r.is_leave) {
        for kind in TaskKind::ALL {
            groups.add(kind.label(), MinuteTotal(record.task_minutes(kind)));
        }
        groups.add(OTHER_TASKS_LABEL, MinuteTotal(record.other_tasks_minutes));
    }

    groups
        .into_entries()
        .into_iter()
        .map(|(label, minutes)| TaskCategoryHours {
            label,
            hours: round_to(minutes_to_hours(minutes.0), 1),
        })
        .collect()
}

/* -------------------------------------------------------------------------- */
/* Leave days */
/* -------------------------------------------------------------------------- */

/// Casual, annual and sick days per employee, first-seen order
///
/// Employees without any of the three, and rows without an employee, are
/// left out.
pub fn leave_counts(records: &[UtilizationRecord]) -> Vec<LeaveCounts> {
    let groups: OrderedGroups<LeaveTally> =
        records.iter().map(|r| (r.employee.as_str(), LeaveTally::from_shift(&r.shift))).collect();

    groups
        .into_entries()
        .into_iter()
        .filter(|(name, tally)| !name.is_empty() && name != NO_PERFORMER && tally.total() > 0)
        .map(|(name, tally)| LeaveCounts {
            name,
            casual: tally.casual,
            annual: tally.annual,
            sick: tally.sick,
        })
        .collect()
}

/* -------------------------------------------------------------------------- */
/* KPI summary */
/* -------------------------------------------------------------------------- */

/// Headline numbers over the given (already filtered) records
pub fn kpi_summary(records: &[UtilizationRecord]) -> KpiSummary {
    if records.is_empty() {
        return KpiSummary::default();
    }

    let total_employees = records
        .iter()
        .map(|r| r.employee.as_str())
        .filter(|name| !name.is_empty())
        .collect::<HashSet<_>>()
        .len();

    let paid: Vec<&UtilizationRecord> =
        records.iter().filter(|r| r.paid_day_minutes > 0.0).collect();
    let avg_public_utilization = if paid.is_empty() {
        0.0
    } else {
        paid.iter().map(|r| r.public_utilization_pct).sum::<f64>() / paid.len() as f64
    };

    let overall_minutes: f64 = records.iter().map(|r| r.overall_actual_minutes).sum();
    let monitoring_minutes: f64 = records.iter().map(|r| r.actual_monitoring_minutes).sum();
    let tasks_minutes: f64 = records.iter().map(|r| r.actual_tasks_minutes).sum();
    let booked = monitoring_minutes + tasks_minutes;
    let share = |part: f64| if booked == 0.0 { 0.0 } else { part / booked * 100.0 };

    KpiSummary {
        total_employees: u32::try_from(total_employees).unwrap_or(u32::MAX),
        avg_public_utilization: round_to(avg_public_utilization, 1),
        total_hours: round_to(minutes_to_hours(overall_minutes), 1),
        top_performer: top_performer(records),
        monitoring_share_pct: round_to(share(monitoring_minutes), 1),
        tasks_share_pct: round_to(share(tasks_minutes), 1),
    }
}
