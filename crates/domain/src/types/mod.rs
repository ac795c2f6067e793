//! Domain types and models
//!
//! Raw sheet data, the records derived from it, and the request/report
//! values exchanged with the reporting layer.

pub mod calls;
pub mod cell;
pub mod filter;
pub mod report;
pub mod sort;
pub mod utilization;

pub use calls::{CallAggregate, CallRecord};
pub use cell::{CellValue, RawRow, Sheet};
pub use filter::{DatePreset, DateRange, FilterCriteria};
pub use report::{
    CallReport, CallReportRequest, EmployeeUtilization, KpiSummary, LeaveCounts,
    TaskCategoryHours, TopPerformer, UtilizationReport, UtilizationReportRequest,
};
pub use sort::{LeaveSortMode, SortDirection, SortSpec};
pub use utilization::{
    StatusBand, TaskDetail, TaskKind, UtilizationRecord, UtilizationStatus, STATUS_BANDS,
};
