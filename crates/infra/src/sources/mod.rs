//! Workbook sources
//!
//! Adapters implementing the core `SheetSource` port.

pub mod json_workbook;

pub use json_workbook::{parse_workbook, JsonWorkbookSource, WorkbookError};
