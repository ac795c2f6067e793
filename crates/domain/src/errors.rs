//! Error types used throughout the application
//!
//! The normalization and aggregation transforms are total and never return
//! these. Errors only surface at the ingestion boundary (no usable rows) and
//! in the infrastructure adapters (config files, workbook sources).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for OpsBoard
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum OpsBoardError {
    #[error("No eligible rows found across any sheet: {0}")]
    NoEligibleRows(String),

    #[error("No rows carrying the minimum required fields: {0}")]
    MissingRequiredFields(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl OpsBoardError {
    /// Whether this error was raised by the ingestion gate rather than by
    /// an I/O or configuration failure.
    pub fn is_ingestion_failure(&self) -> bool {
        matches!(self, Self::NoEligibleRows(_) | Self::MissingRequiredFields(_))
    }
}

/// Result type alias for OpsBoard operations
pub type Result<T> = std::result::Result<T, OpsBoardError>;
