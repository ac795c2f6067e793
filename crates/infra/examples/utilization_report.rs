//! Example: Building reports from a JSON workbook
//!
//! Loads the engine configuration the same way the service does (explicit
//! `OPSBOARD_CONFIG`, then `opsboard.toml`/`opsboard.json` next to the
//! binary or in the working directory, then built-in defaults), reads a
//! workbook and prints the report as JSON.
//!
//! Run with a workbook exported by the sheet tooling:
//!
//! ```bash
//! cargo run -p opsboard-infra --example utilization_report -- march.json
//! cargo run -p opsboard-infra --example utilization_report -- calls.json calls
//! ```
//!
//! Without arguments a small built-in workbook is used. Set `RUST_LOG=debug`
//! to see the ingestion logs.

use std::sync::Arc;

use opsboard_core::{IngestionService, ReportService};
use opsboard_domain::{CallReportRequest, SortSpec, UtilizationReportRequest};
use opsboard_infra::{config, init_tracing, JsonWorkbookSource, LogFormat, SystemClock};

const SAMPLE_WORKBOOK: &str = r#"{
  "sheets": [
    { "name": "Week 1",
      "rows": [
        { "Date": "2024-03-03", "Shift": "Morning", "Name": "Ali", "VIP": 12, "Coaching": 6 },
        { "Date": "2024-03-03", "Shift": "Night", "Name": "Sara", "Voice - What's App": 20 },
        { "Date": "2024-03-04", "Shift": "Annual", "Name": "Sara" },
        { "Date": "2024-03-04", "Shift": "Morning", "Name": "Ali", "Overall Actual time": 470 }
      ] }
  ]
}"#;

fn main() -> anyhow::Result<()> {
    init_tracing(LogFormat::Text)?;

    println!("OpsBoard Report Example");
    println!("=======================\n");

    let engine_config = Arc::new(config::load()?);
    println!("✓ Configuration loaded");
    println!("  Default day:      {} min", engine_config.default_day_minutes);
    println!("  Short call limit: {} min\n", engine_config.short_call_threshold_minutes);

    let mut args = std::env::args().skip(1);
    let source = match args.next() {
        Some(path) => JsonWorkbookSource::from_path(path),
        None => {
            println!("ℹ️  No workbook given, using the built-in sample\n");
            JsonWorkbookSource::from_json_str(SAMPLE_WORKBOOK)
        }
    };
    let calls_mode = args.next().is_some_and(|mode| mode.eq_ignore_ascii_case("calls"));

    let ingestion = IngestionService::new(Arc::clone(&engine_config));
    let reports = ReportService::new(engine_config, Arc::new(SystemClock));

    let json = if calls_mode {
        let records = ingestion.load_calls(&source)?;
        let request =
            CallReportRequest { sort: Some(SortSpec::natural("totalCalls")), ..Default::default() };
        let report = reports.call_report(&records, &request);
        println!("✓ {} calls from {} monitors", report.records.len(), report.aggregates.len());
        serde_json::to_string_pretty(&report)?
    } else {
        let records = ingestion.load_utilization(&source)?;
        let report = reports.utilization_report(&records, &UtilizationReportRequest::default());
        println!("✓ {} rows for {} employees", report.records.len(), report.employees.len());
        println!(
            "  Top performer: {} ({:.1}%)",
            report.kpis.top_performer.name, report.kpis.top_performer.score
        );
        serde_json::to_string_pretty(&report)?
    };

    println!("\n{json}");
    Ok(())
}
