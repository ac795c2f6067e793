//! Aggregators
//!
//! Folds over record slices into insertion-ordered groups. Every
//! accumulator merges associatively, so aggregating chunks and merging the
//! results matches a single pass.

pub mod calls;
pub mod grouping;
pub mod utilization;

pub use calls::{aggregate_calls, call_totals, CallTotals};
pub use grouping::{Accumulator, OrderedGroups};
pub use utilization::{
    employee_averages, kpi_summary, leave_counts, public_pct_by_employee, task_category_hours,
    top_performer, LeaveTally, MinuteTotal, PublicPctTotals,
};
