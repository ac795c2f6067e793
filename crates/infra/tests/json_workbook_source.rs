//! End-to-end tests: JSON workbook on disk through ingestion and reporting

use std::io::Write;
use std::sync::Arc;

use chrono::NaiveDate;
use opsboard_core::{FixedClock, IngestionService, ReportService, SheetSource};
use opsboard_domain::{
    CallReportRequest, EngineConfig, OpsBoardError, SortSpec, UtilizationReportRequest,
    UtilizationStatus,
};
use opsboard_infra::JsonWorkbookSource;
use tempfile::NamedTempFile;

const UTILIZATION_WORKBOOK: &str = r#"{
  "sheets": [
    { "name": "March",
      "rows": [
        { "Date": "2024-03-01", "Shift": "Morning", "Name": "Ali", "VIP": 16 },
        { "Date": "2024-03-02", "Shift": "Morning", "Name": "Sara", "VIP": 8 },
        { "Date": "2024-03-03", "Shift": "Sick", "Name": "Sara", "VIP": 0 }
      ] },
    { "name": "Notes",
      "headers": ["Comment"],
      "rows": [ { "Comment": "public holiday on the 10th" } ] }
  ]
}"#;

const CALL_WORKBOOK: &str = r#"{
  "sheets": [
    { "name": "Calls",
      "headers": ["Monitored By", "Duration", "Call Date"],
      "rows": [
        { "Monitored By": "Mona", "Duration": "1:30", "Call Date": "2024-03-01" },
        { "Monitored By": "Mona", "Duration": 4, "Call Date": "2024-03-01" },
        { "Monitored By": "Mona", "Duration": "", "Call Date": "2024-03-02" },
        { "Monitored By": "Omar", "Duration": "12:00", "Call Date": "2024-03-02" }
      ] }
  ]
}"#;

fn workbook_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes()).expect("Failed to write workbook");
    file
}

fn services() -> (IngestionService, ReportService) {
    let config = Arc::new(EngineConfig::default());
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let ingestion = IngestionService::new(Arc::clone(&config));
    (ingestion, ReportService::new(config, Arc::new(FixedClock(today))))
}

#[test]
fn test_utilization_report_from_workbook_file() {
    let file = workbook_file(UTILIZATION_WORKBOOK);
    let source = JsonWorkbookSource::from_path(file.path());
    let (ingestion, reports) = services();

    let records = ingestion.load_utilization(&source).expect("workbook ingests");
    // The notes sheet fails the header gate
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.sheet_name == "March"));

    let report = reports.utilization_report(&records, &UtilizationReportRequest::default());
    assert_eq!(report.employees, vec!["Ali".to_string(), "Sara".to_string()]);
    assert_eq!(report.kpis.total_employees, 2);
    assert_eq!(report.kpis.top_performer.name, "Ali");
    assert_eq!(report.kpis.top_performer.score, 100.0);

    let ali = &report.records[0];
    assert_eq!(ali.public_utilization_pct, 100.0);
    assert_eq!(ali.status, UtilizationStatus::Excellent);

    assert_eq!(report.employee_averages[0].name, "Ali");
    assert_eq!(report.leave_counts.len(), 1);
    assert_eq!(report.leave_counts[0].name, "Sara");
    assert_eq!(report.leave_counts[0].sick, 1);
}

#[test]
fn test_call_report_from_workbook_file() {
    let file = workbook_file(CALL_WORKBOOK);
    let source = JsonWorkbookSource::from_path(file.path());
    let (ingestion, reports) = services();

    let records = ingestion.load_calls(&source).expect("workbook ingests");
    assert_eq!(records.len(), 4);

    let request = CallReportRequest { sort: Some(SortSpec::asc("name")), ..Default::default() };
    let report = reports.call_report(&records, &request);
    assert_eq!(report.employees, vec!["Mona".to_string(), "Omar".to_string()]);

    let mona = &report.aggregates[0];
    assert_eq!(mona.name, "Mona");
    assert_eq!(mona.total_calls, 3);
    assert_eq!(mona.valid_calls, 2);
    assert_eq!(mona.short_calls, 1);
    assert_eq!(mona.bucket(1), 1);
    assert_eq!(mona.bucket(4), 1);

    let omar = &report.aggregates[1];
    assert_eq!(omar.valid_calls, 1);
    assert_eq!(omar.gt10, 1);
}

#[test]
fn test_inline_workbook_matches_file_workbook() {
    let file = workbook_file(CALL_WORKBOOK);
    let from_file = JsonWorkbookSource::from_path(file.path()).sheets().expect("file reads");
    let inline = JsonWorkbookSource::from_json_str(CALL_WORKBOOK).sheets().expect("inline reads");

    assert_eq!(from_file, inline);
    assert_eq!(inline[0].headers, vec!["Monitored By", "Duration", "Call Date"]);
}

#[test]
fn test_missing_workbook_is_a_source_error() {
    let source = JsonWorkbookSource::from_path("/nonexistent/workbook.json");
    let (ingestion, _) = services();

    match ingestion.load_calls(&source) {
        Err(OpsBoardError::Source(msg)) => assert!(msg.contains("workbook.json")),
        other => panic!("Expected Source error, got {other:?}"),
    }
}

#[test]
fn test_malformed_workbook_is_a_serialization_error() {
    let source = JsonWorkbookSource::from_json_str(r#"{ "sheets": [ "#);
    assert!(matches!(source.sheets(), Err(OpsBoardError::Serialization(_))));
}
