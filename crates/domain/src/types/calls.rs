//! Call-monitoring types
//!
//! A [`CallRecord`] is one logged call; a [`CallAggregate`] folds all calls of
//! one monitoring employee into counts, durations and a minute histogram.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// One logged call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    /// Trimmed employee name; empty names are kept but never aggregated
    pub monitored_by: String,
    /// Non-negative; 0 means the call was not valid/answered
    pub duration_minutes: f64,
    /// ISO `YYYY-MM-DD`, the raw text when unrecognizable, or empty
    pub call_date: String,
    /// Duration cell as it appeared in the sheet
    pub raw_duration: String,
    pub sheet_name: String,
}

impl CallRecord {
    pub fn is_valid(&self) -> bool {
        self.duration_minutes > 0.0
    }
}

/// Per-employee call statistics
///
/// # Field Invariants
/// - `valid_calls == m1 + ... + m10 + gt10`
/// - `g1to3 + g4to6 + g7to10 + gt10 == valid_calls`
/// - `total_calls >= valid_calls`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct CallAggregate {
    pub name: String,
    pub total_calls: u32,
    pub valid_calls: u32,
    pub avg_duration_min: f64,
    pub total_duration_minutes: f64,
    pub total_duration_hours: f64,
    pub short_calls: u32,
    pub short_pct: f64,

    /// Calls per whole-minute bucket, index 0 is `m1`
    pub minute_buckets: [u32; 10],
    pub gt10: u32,

    pub g1to3: u32,
    pub g4to6: u32,
    pub g7to10: u32,
}

impl CallAggregate {
    /// Count for the `minute`-th bucket (1..=10); 0 outside that range
    pub fn bucket(&self, minute: usize) -> u32 {
        minute
            .checked_sub(1)
            .and_then(|idx| self.minute_buckets.get(idx))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CallAggregate {
        CallAggregate {
            name: "Mona".into(),
            total_calls: 3,
            valid_calls: 2,
            avg_duration_min: 3.25,
            total_duration_minutes: 6.5,
            total_duration_hours: 0.11,
            short_calls: 1,
            short_pct: 50.0,
            minute_buckets: [1, 0, 0, 0, 1, 0, 0, 0, 0, 0],
            gt10: 0,
            g1to3: 1,
            g4to6: 1,
            g7to10: 0,
        }
    }

    #[test]
    fn test_bucket_accessor_is_one_based() {
        let agg = sample();
        assert_eq!(agg.bucket(1), 1);
        assert_eq!(agg.bucket(5), 1);
        assert_eq!(agg.bucket(0), 0);
        assert_eq!(agg.bucket(11), 0);
    }

    #[test]
    fn test_call_record_validity() {
        let mut record = CallRecord {
            monitored_by: "Mona".into(),
            duration_minutes: 0.0,
            call_date: String::new(),
            raw_duration: "0".into(),
            sheet_name: "Calls".into(),
        };
        assert!(!record.is_valid());
        record.duration_minutes = 0.25;
        assert!(record.is_valid());
    }

    #[test]
    fn test_aggregate_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["totalCalls"], 3);
        assert_eq!(json["avgDurationMin"], 3.25);
        assert!(json.get("g1to3").is_some());
    }
}
