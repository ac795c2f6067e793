//! # OpsBoard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Cell normalizers and the alias resolver
//! - Utilization and call record builders
//! - Filter engine, aggregators and the table sorter
//! - Ingestion and report services
//! - Port interfaces (traits) for sheet sources and the clock
//!
//! ## Architecture Principles
//! - Only depends on `opsboard-domain`
//! - No file, network or platform code
//! - All external inputs via traits
//! - Pure, testable business logic

pub mod aggregate;
pub mod calls;
pub mod filter;
pub mod ingest;
pub mod normalize;
pub mod report;
pub mod sort;
pub mod utilization;
pub mod utils;

// Re-export specific items to avoid ambiguity
pub use aggregate::{
    aggregate_calls, employee_averages, kpi_summary, leave_counts, task_category_hours,
    top_performer, Accumulator, OrderedGroups,
};
pub use calls::CallRecordBuilder;
pub use filter::{Clock, FilterEngine, Filterable, FixedClock, ResolvedFilter};
pub use ingest::{IngestionService, SheetSource, StaticSheetSource};
pub use normalize::AliasResolver;
pub use report::ReportService;
pub use sort::{sort_by_spec, sort_leave_counts, SortValue, Sortable};
pub use utilization::UtilizationRecordBuilder;
// Re-export utilities
pub use utils::Fallback;
