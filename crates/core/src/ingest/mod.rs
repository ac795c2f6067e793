//! Workbook ingestion
//!
//! Gates sheets, bounds the rows read from each one and turns what is left
//! into typed records. This is the only stage of the pipeline that can
//! fail.

pub mod gate;
pub mod ports;
pub mod service;

pub use gate::is_utilization_sheet;
pub use ports::{SheetSource, StaticSheetSource};
pub use service::IngestionService;
