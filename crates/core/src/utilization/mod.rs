//! Daily utilization records

pub mod builder;

pub use builder::UtilizationRecordBuilder;
