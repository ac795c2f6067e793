//! Ingestion service - raw sheets in, typed records out

use std::sync::Arc;

use opsboard_domain::{CallRecord, EngineConfig, OpsBoardError, Result, Sheet, UtilizationRecord};
use tracing::{debug, warn};

use super::gate::is_utilization_sheet;
use super::ports::SheetSource;
use crate::calls::CallRecordBuilder;
use crate::utilization::UtilizationRecordBuilder;

/// Ingestion service
pub struct IngestionService {
    config: Arc<EngineConfig>,
}

impl IngestionService {
    /// Create a new ingestion service
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Utilization records from every sheet that passes the header gate
    ///
    /// At most `max_rows_per_sheet` rows are read from each sheet. Fails
    /// with [`OpsBoardError::NoEligibleRows`] when nothing usable is found.
    pub fn ingest_utilization(&self, sheets: &[Sheet]) -> Result<Vec<UtilizationRecord>> {
        let builder = UtilizationRecordBuilder::new(&self.config);
        let mut records = Vec::new();
        let mut eligible_sheets = 0usize;

        for sheet in sheets {
            let gate = &self.config.sheet_gate;
            if !is_utilization_sheet(&sheet.headers, gate, self.config.max_header_columns) {
                debug!(sheet = %sheet.name, "Skipping sheet without date and name headers");
                continue;
            }
            eligible_sheets += 1;

            let before = records.len();
            records.extend(
                sheet
                    .rows
                    .iter()
                    .take(self.config.max_rows_per_sheet)
                    .filter_map(|row| builder.build(row, &sheet.name)),
            );
            debug!(sheet = %sheet.name, records = records.len() - before, "Ingested sheet");
        }

        if records.is_empty() {
            warn!(
                sheets = sheets.len(),
                eligible_sheets, "No utilization rows found in workbook"
            );
            return Err(OpsBoardError::NoEligibleRows(format!(
                "{} sheet(s) inspected, {} passed the header check",
                sheets.len(),
                eligible_sheets
            )));
        }

        debug!(records = records.len(), "Utilization ingestion complete");
        Ok(records)
    }

    /// Call records from every sheet
    ///
    /// Fails with [`OpsBoardError::MissingRequiredFields`] when no record
    /// names a monitor or carries a duration.
    pub fn ingest_calls(&self, sheets: &[Sheet]) -> Result<Vec<CallRecord>> {
        let builder = CallRecordBuilder::new(&self.config);
        let records: Vec<CallRecord> = sheets
            .iter()
            .flat_map(|sheet| sheet.rows.iter().filter_map(|row| builder.build(row, &sheet.name)))
            .collect();

        let usable =
            records.iter().any(|r| !r.monitored_by.is_empty() || !r.raw_duration.is_empty());
        if !usable {
            warn!(
                sheets = sheets.len(),
                rows = records.len(),
                "No call rows with a monitor or a duration"
            );
            return Err(OpsBoardError::MissingRequiredFields(
                "expected a monitor name or a duration in at least one row".to_string(),
            ));
        }

        debug!(records = records.len(), "Call ingestion complete");
        Ok(records)
    }

    /// Reads `source` and ingests it as a utilization workbook
    pub fn load_utilization(&self, source: &dyn SheetSource) -> Result<Vec<UtilizationRecord>> {
        let sheets = source.sheets()?;
        debug!(source = %source.describe(), sheets = sheets.len(), "Loading utilization workbook");
        self.ingest_utilization(&sheets)
    }

    /// Reads `source` and ingests it as a call log
    pub fn load_calls(&self, source: &dyn SheetSource) -> Result<Vec<CallRecord>> {
        let sheets = source.sheets()?;
        debug!(source = %source.describe(), sheets = sheets.len(), "Loading call log");
        self.ingest_calls(&sheets)
    }
}

#[cfg(test)]
mod tests {
    use opsboard_domain::RawRow;

    use super::*;
    use crate::ingest::ports::StaticSheetSource;

    fn service() -> IngestionService {
        IngestionService::new(Arc::new(EngineConfig::default()))
    }

    fn daily_sheet(name: &str, rows: Vec<RawRow>) -> Sheet {
        let headers = ["Date", "Shift", "Name", "VIP"].iter().map(ToString::to_string).collect();
        Sheet::new(name, headers, rows)
    }

    #[test]
    fn test_ingest_skips_gated_sheets() {
        let summary = Sheet::new(
            "Summary",
            vec!["Employee".into(), "Total".into()],
            vec![RawRow::new().with("Name", "Ali").with("Date", "2024-03-01")],
        );
        let daily = daily_sheet(
            "March",
            vec![
                RawRow::new().with("Date", "2024-03-01").with("Name", "Ali").with("VIP", 2),
                RawRow::new().with("VIP", 4),
            ],
        );

        let records = service().ingest_utilization(&[summary, daily]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sheet_name, "March");
    }

    #[test]
    fn test_row_limit_per_sheet() {
        let mut config = EngineConfig::default();
        config.max_rows_per_sheet = 2;
        let service = IngestionService::new(Arc::new(config));
        let rows = (1..=5).map(|day| RawRow::new().with("Name", format!("E{day}"))).collect();

        let records = service.ingest_utilization(&[daily_sheet("March", rows)]).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_no_eligible_rows() {
        let err = service().ingest_utilization(&[daily_sheet("Empty", Vec::new())]).unwrap_err();
        assert!(matches!(err, OpsBoardError::NoEligibleRows(_)));

        let err = service().ingest_utilization(&[]).unwrap_err();
        assert!(err.is_ingestion_failure());
    }

    #[test]
    fn test_calls_read_every_sheet() {
        let first = Sheet::new(
            "Week 1",
            Vec::new(),
            vec![RawRow::new().with("Monitored By", "Mona").with("Duration", "1:30")],
        );
        let second = Sheet::new(
            "Week 2",
            Vec::new(),
            vec![RawRow::new().with("Monitor By", "Ali").with("Duration", 4)],
        );

        let records = service().ingest_calls(&[first, second]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].sheet_name, "Week 2");
    }

    #[test]
    fn test_calls_without_monitor_or_duration_fail() {
        let sheet = Sheet::new(
            "Calls",
            Vec::new(),
            vec![RawRow::new().with("Call Date", "2024-03-04")],
        );
        let err = service().ingest_calls(&[sheet]).unwrap_err();
        assert!(matches!(err, OpsBoardError::MissingRequiredFields(_)));
    }

    #[test]
    fn test_load_from_source() {
        let source = StaticSheetSource::new(vec![daily_sheet(
            "March",
            vec![RawRow::new().with("Date", "2024-03-01").with("Name", "Ali")],
        )]);
        let records = service().load_utilization(&source).unwrap();
        assert_eq!(records[0].employee, "Ali");
    }
}
