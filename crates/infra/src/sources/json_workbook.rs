//! JSON workbook source
//!
//! Reads workbooks that an upstream exporter already flattened to JSON:
//!
//! ```json
//! { "sheets": [
//!     { "name": "March",
//!       "headers": ["Date", "Name", "VIP"],
//!       "rows": [ { "Date": "2024-03-01", "Name": "Ali", "VIP": 3 } ] }
//! ] }
//! ```
//!
//! `headers` is optional. Without it the header row is the first row's keys
//! in the order they appear in the file.

use std::io;
use std::path::{Path, PathBuf};

use opsboard_core::SheetSource;
use opsboard_domain::{CellValue, OpsBoardError, RawRow, Result, Sheet};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::InfraError;

/// Workbook read failures
#[derive(Debug, thiserror::Error)]
pub enum WorkbookError {
    #[error("Failed to read workbook {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed workbook JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<WorkbookError> for OpsBoardError {
    fn from(value: WorkbookError) -> Self {
        match value {
            WorkbookError::Read { path, source } => match InfraError::from(source).0 {
                OpsBoardError::Source(msg) => {
                    OpsBoardError::Source(format!("{}: {}", path.display(), msg))
                }
                other => other,
            },
            WorkbookError::Json(e) => InfraError::from(e).into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WorkbookDocument {
    sheets: Vec<SheetDocument>,
}

#[derive(Debug, Deserialize)]
struct SheetDocument {
    #[serde(default)]
    name: String,
    #[serde(default)]
    headers: Option<Vec<String>>,
    #[serde(default)]
    rows: Vec<Map<String, Value>>,
}

impl SheetDocument {
    fn into_sheet(self, index: usize) -> Sheet {
        let name = if self.name.trim().is_empty() {
            format!("Sheet{}", index + 1)
        } else {
            self.name
        };
        let headers = match self.headers {
            Some(headers) if !headers.is_empty() => headers,
            _ => self.rows.first().map(|row| row.keys().cloned().collect()).unwrap_or_default(),
        };
        let rows = self.rows.into_iter().map(row_from_json).collect();
        Sheet::new(name, headers, rows)
    }
}

fn row_from_json(row: Map<String, Value>) -> RawRow {
    row.into_iter().map(|(label, value)| (label, cell_from_json(value))).collect()
}

/// Cell for one JSON value; nested arrays and objects keep their JSON text
fn cell_from_json(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Bool(b),
        Value::Number(n) => n.as_f64().map_or(CellValue::Empty, CellValue::Number),
        Value::String(s) => CellValue::Text(s),
        nested @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(nested.to_string()),
    }
}

/// Parse a JSON workbook document into sheets
pub fn parse_workbook(json: &str) -> std::result::Result<Vec<Sheet>, WorkbookError> {
    let document: WorkbookDocument = serde_json::from_str(json)?;
    Ok(document
        .sheets
        .into_iter()
        .enumerate()
        .map(|(index, sheet)| sheet.into_sheet(index))
        .collect())
}

#[derive(Debug, Clone)]
enum Origin {
    File(PathBuf),
    Inline(String),
}

/// [`SheetSource`] over a JSON workbook file or string
///
/// Files are read on every call to [`SheetSource::sheets`], so a long-lived
/// source sees the latest export.
#[derive(Debug, Clone)]
pub struct JsonWorkbookSource {
    origin: Origin,
}

impl JsonWorkbookSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { origin: Origin::File(path.into()) }
    }

    pub fn from_json_str(json: impl Into<String>) -> Self {
        Self { origin: Origin::Inline(json.into()) }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.origin {
            Origin::File(path) => Some(path),
            Origin::Inline(_) => None,
        }
    }

    fn read(&self) -> std::result::Result<Vec<Sheet>, WorkbookError> {
        match &self.origin {
            Origin::File(path) => {
                let contents = std::fs::read_to_string(path)
                    .map_err(|source| WorkbookError::Read { path: path.clone(), source })?;
                parse_workbook(&contents)
            }
            Origin::Inline(json) => parse_workbook(json),
        }
    }
}

impl SheetSource for JsonWorkbookSource {
    fn sheets(&self) -> Result<Vec<Sheet>> {
        let sheets = self.read()?;
        debug!(source = %self.describe(), sheets = sheets.len(), "Read JSON workbook");
        Ok(sheets)
    }

    fn describe(&self) -> String {
        match &self.origin {
            Origin::File(path) => path.display().to_string(),
            Origin::Inline(_) => "inline JSON workbook".to_string(),
        }
    }
}
