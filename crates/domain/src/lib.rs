//! # OpsBoard Domain
//!
//! Business domain types and models for OpsBoard.
//!
//! This crate contains:
//! - Raw sheet data types (CellValue, RawRow, Sheet)
//! - Derived record types (UtilizationRecord, CallRecord, CallAggregate)
//! - Filter, sort and report value types
//! - Engine configuration (alias tables, weights, thresholds)
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other OpsBoard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod fields;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
