//! # OpsBoard Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (TOML/JSON files plus environment overrides)
//! - Workbook sources (JSON workbooks)
//! - The system clock
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `opsboard-core`
//! - Depends on `opsboard-domain` and `opsboard-core`
//! - Contains all "impure" code (files, environment, wall clock)

pub mod clock;
pub mod config;
pub mod errors;
pub mod observability;
pub mod sources;

// Re-export commonly used items
pub use clock::SystemClock;
pub use errors::InfraError;
pub use observability::{init_tracing, LogFormat};
pub use sources::JsonWorkbookSource;
