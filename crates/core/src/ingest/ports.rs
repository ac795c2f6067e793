//! Port interfaces for workbook ingestion
//!
//! Core never reads files. Adapters in the infra crate turn whatever a
//! workbook lives in into plain [`Sheet`]s.

use opsboard_domain::{Result, Sheet};

/// Trait for anything that can hand over the sheets of one workbook
pub trait SheetSource: Send + Sync {
    /// All sheets in workbook order
    fn sheets(&self) -> Result<Vec<Sheet>>;

    /// Short label for logs, such as a file path
    fn describe(&self) -> String {
        "workbook".to_string()
    }
}

/// In-memory source, handy for tests and callers that already hold sheets
#[derive(Debug, Clone, Default)]
pub struct StaticSheetSource {
    sheets: Vec<Sheet>,
}

impl StaticSheetSource {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }
}

impl SheetSource for StaticSheetSource {
    fn sheets(&self) -> Result<Vec<Sheet>> {
        Ok(self.sheets.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory sheet(s)", self.sheets.len())
    }
}
