//! Call-monitoring records

pub mod buckets;
pub mod builder;

pub use buckets::{minute_bucket, BucketGroup, MinuteBucket};
pub use builder::CallRecordBuilder;
