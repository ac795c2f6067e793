//! Report service - filtered records in, report tables out
//!
//! Ties the filter engine, the aggregators and the sorter together. All of
//! it is pure: the same records and request always give the same report.

use std::collections::BTreeSet;
use std::sync::Arc;

use opsboard_domain::{
    CallRecord, CallReport, CallReportRequest, EngineConfig, SortSpec, UtilizationRecord,
    UtilizationReport, UtilizationReportRequest,
};
use tracing::debug;

use crate::aggregate::{
    aggregate_calls, employee_averages, kpi_summary, leave_counts, task_category_hours,
};
use crate::filter::{Clock, FilterEngine};
use crate::sort::{sort_by_spec, sort_leave_counts};

/// Report service
pub struct ReportService {
    config: Arc<EngineConfig>,
    filter: FilterEngine,
}

impl ReportService {
    /// Create a new report service
    pub fn new(config: Arc<EngineConfig>, clock: Arc<dyn Clock>) -> Self {
        Self { config, filter: FilterEngine::new(clock) }
    }

    pub fn filter_engine(&self) -> &FilterEngine {
        &self.filter
    }

    /// Utilization report over `records` narrowed by `request.filter`
    pub fn utilization_report(
        &self,
        records: &[UtilizationRecord],
        request: &UtilizationReportRequest,
    ) -> UtilizationReport {
        let employees = distinct_names(records.iter().map(|r| r.employee.as_str()));
        let mut filtered = self.filter.apply(records, &request.filter);

        let kpis = kpi_summary(&filtered);

        let mut averages = employee_averages(&filtered);
        sort_by_spec(&mut averages, &SortSpec::new("avgPublicPct", request.averages_direction));

        let mut task_hours = task_category_hours(&filtered);
        sort_by_spec(&mut task_hours, &SortSpec::new("hours", request.task_hours_direction));

        let mut leave = leave_counts(&filtered);
        sort_leave_counts(&mut leave, request.leave_sort);

        if let Some(spec) = &request.record_sort {
            sort_by_spec(&mut filtered, spec);
        }

        debug!(
            input = records.len(),
            filtered = filtered.len(),
            employees = averages.len(),
            "Built utilization report"
        );

        UtilizationReport {
            records: filtered,
            employees,
            kpis,
            employee_averages: averages,
            task_hours,
            leave_counts: leave,
        }
    }

    /// Call report over `records` narrowed by `request.filter`
    pub fn call_report(&self, records: &[CallRecord], request: &CallReportRequest) -> CallReport {
        let employees = distinct_names(records.iter().map(|r| r.monitored_by.trim()));
        let filtered = self.filter.apply(records, &request.filter);

        let mut aggregates = aggregate_calls(&filtered, self.config.short_call_threshold_minutes);
        if let Some(spec) = &request.sort {
            sort_by_spec(&mut aggregates, spec);
        }

        debug!(
            input = records.len(),
            filtered = filtered.len(),
            monitors = aggregates.len(),
            "Built call report"
        );

        CallReport { records: filtered, employees, aggregates }
    }
}

/// Sorted distinct non-empty names, for employee pickers
fn distinct_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    names
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use opsboard_domain::{DatePreset, FilterCriteria, RawRow, SortDirection};

    use super::*;
    use crate::calls::CallRecordBuilder;
    use crate::filter::FixedClock;
    use crate::utilization::UtilizationRecordBuilder;

    fn service() -> ReportService {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        ReportService::new(Arc::new(EngineConfig::default()), Arc::new(FixedClock(today)))
    }

    fn utilization(rows: &[RawRow]) -> Vec<UtilizationRecord> {
        let config = EngineConfig::default();
        let builder = UtilizationRecordBuilder::new(&config);
        rows.iter().filter_map(|row| builder.build(row, "Daily")).collect()
    }

    fn day(name: &str, date: &str, overall: i32) -> RawRow {
        RawRow::new()
            .with("Name", name)
            .with("Date", date)
            .with("Shift", "Morning")
            .with("Overall Actual time", overall)
    }

    #[test]
    fn test_utilization_report_tables() {
        let records = utilization(&[
            day("Mona", "2024-03-14", 384),
            day("Ali", "2024-03-14", 456),
            day("Ali", "2024-02-01", 480),
            RawRow::new().with("Name", "Sara").with("Date", "2024-03-13").with("Shift", "sick"),
        ]);

        let request = UtilizationReportRequest {
            filter: FilterCriteria::default().with_preset(DatePreset::ThisMonth),
            ..UtilizationReportRequest::default()
        };
        let report = service().utilization_report(&records, &request);

        assert_eq!(report.employees, ["Ali", "Mona", "Sara"]);
        assert_eq!(report.records.len(), 3);
        assert_eq!(report.kpis.total_employees, 3);
        assert_eq!(report.kpis.top_performer.name, "Ali");
        // Averages come biggest first
        assert_eq!(report.employee_averages[0].name, "Ali");
        assert_eq!(report.employee_averages[0].avg_public_pct, 95.0);
        assert_eq!(report.employee_averages[1].avg_public_pct, 80.0);
        assert_eq!(report.leave_counts.len(), 1);
        assert_eq!(report.leave_counts[0].sick, 1);
        assert_eq!(report.task_hours.len(), 9);
    }

    #[test]
    fn test_record_sort_and_chart_direction() {
        let records = utilization(&[
            day("Mona", "2024-03-14", 384),
            day("Ali", "2024-03-12", 456),
            day("Omar", "2024-03-13", 420),
        ]);
        let request = UtilizationReportRequest {
            record_sort: Some(SortSpec::asc("date")),
            averages_direction: SortDirection::Asc,
            ..UtilizationReportRequest::default()
        };
        let report = service().utilization_report(&records, &request);

        let order: Vec<&str> = report.records.iter().map(|r| r.employee.as_str()).collect();
        assert_eq!(order, ["Ali", "Omar", "Mona"]);
        assert_eq!(report.employee_averages[0].name, "Mona");
    }

    #[test]
    fn test_call_report() {
        let config = EngineConfig::default();
        let builder = CallRecordBuilder::new(&config);
        let rows = [
            RawRow::new().with("Monitored By", "Mona").with("Duration", "1:30"),
            RawRow::new().with("Monitored By", "Ali").with("Duration", "12:00"),
            RawRow::new().with("Monitored By", "Mona").with("Duration", "5:00"),
            RawRow::new().with("Monitored By", "").with("Duration", "3:00"),
        ];
        let records: Vec<CallRecord> =
            rows.iter().filter_map(|row| builder.build(row, "Calls")).collect();

        let request =
            CallReportRequest { sort: Some(SortSpec::desc("totalCalls")), ..Default::default() };
        let report = service().call_report(&records, &request);

        assert_eq!(report.employees, ["Ali", "Mona"]);
        assert_eq!(report.records.len(), 4);
        assert_eq!(report.aggregates.len(), 2);
        assert_eq!(report.aggregates[0].name, "Mona");
        assert_eq!(report.aggregates[1].gt10, 1);

        let only_ali = CallReportRequest {
            filter: FilterCriteria::default().for_employee("Ali"),
            ..Default::default()
        };
        let report = service().call_report(&records, &only_ali);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.aggregates[0].name, "Ali");
    }
}
