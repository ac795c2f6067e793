//! Shared test helpers for `opsboard-core` integration tests.
//!
//! Fixture workbooks and a counting sheet source, so pipeline tests can
//! focus on behaviour instead of row boilerplate.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use opsboard_core::{FixedClock, IngestionService, ReportService, SheetSource};
use opsboard_domain::{EngineConfig, OpsBoardError, RawRow, Result as DomainResult, Sheet};

/// Reporting date used by every pipeline test
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn services() -> (IngestionService, ReportService) {
    let config = Arc::new(EngineConfig::default());
    let ingestion = IngestionService::new(Arc::clone(&config));
    let reports = ReportService::new(config, Arc::new(FixedClock(today())));
    (ingestion, reports)
}

fn labels(headers: &[&str]) -> Vec<String> {
    headers.iter().map(ToString::to_string).collect()
}

/// Daily utilization sheet with the usual English headers
pub fn daily_sheet(name: &str, rows: Vec<RawRow>) -> Sheet {
    Sheet::new(name, labels(&["Date", "Shift", "Name", "Voice - What's App", "VIP"]), rows)
}

/// One working day for `employee`
pub fn work_day(employee: &str, date: &str) -> RawRow {
    RawRow::new().with("Date", date).with("Shift", "Morning").with("Name", employee)
}

pub fn call_sheet(name: &str, rows: Vec<RawRow>) -> Sheet {
    Sheet::new(name, labels(&["Monitored By", "Duration", "Call Date"]), rows)
}

pub fn call(monitor: &str, duration: impl Into<opsboard_domain::CellValue>, date: &str) -> RawRow {
    RawRow::new().with("Monitored By", monitor).with("Duration", duration).with("Call Date", date)
}

/// In-memory `SheetSource` that counts reads and can be told to fail.
#[derive(Default, Clone)]
pub struct MockSheetSource {
    sheets: Vec<Sheet>,
    fail: bool,
    reads: Arc<AtomicUsize>,
}

impl MockSheetSource {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets, ..Self::default() }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl SheetSource for MockSheetSource {
    fn sheets(&self) -> DomainResult<Vec<Sheet>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(OpsBoardError::Source("mock workbook unreadable".into()));
        }
        Ok(self.sheets.clone())
    }

    fn describe(&self) -> String {
        "mock workbook".to_string()
    }
}
