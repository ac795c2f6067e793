//! Per-employee call statistics

use opsboard_domain::constants::MAX_MINUTE_BUCKET;
use opsboard_domain::{CallAggregate, CallRecord};

use super::grouping::{Accumulator, OrderedGroups};
use crate::calls::{minute_bucket, BucketGroup, MinuteBucket};
use crate::normalize::scalars::{minutes_to_hours, round_to};

/// Raw counters for one monitoring employee
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CallTotals {
    pub total_calls: u32,
    pub valid_calls: u32,
    pub total_duration_minutes: f64,
    pub short_calls: u32,
    pub minute_buckets: [u32; MAX_MINUTE_BUCKET],
    pub gt10: u32,
}

impl CallTotals {
    /// Counters for a single call
    pub fn from_record(record: &CallRecord, short_call_threshold: f64) -> Self {
        let mut totals = Self { total_calls: 1, ..Self::default() };
        let duration = record.duration_minutes;
        let Some(bucket) = minute_bucket(duration) else {
            return totals;
        };

        totals.valid_calls = 1;
        totals.total_duration_minutes = duration;
        if duration <= short_call_threshold {
            totals.short_calls = 1;
        }
        match bucket {
            MinuteBucket::Minute(minute) => totals.minute_buckets[minute - 1] = 1,
            MinuteBucket::OverTen => totals.gt10 = 1,
        }
        totals
    }

    fn group_total(&self, group: BucketGroup) -> u32 {
        let buckets = (1..=MAX_MINUTE_BUCKET)
            .filter(|&minute| MinuteBucket::Minute(minute).group() == group)
            .map(|minute| self.minute_buckets[minute - 1])
            .sum::<u32>();
        if group == BucketGroup::OverTen {
            buckets + self.gt10
        } else {
            buckets
        }
    }

    /// Final aggregate with display rounding applied
    pub fn finish(&self, name: String) -> CallAggregate {
        let (avg, short_pct) = if self.valid_calls == 0 {
            (0.0, 0.0)
        } else {
            let valid = f64::from(self.valid_calls);
            (self.total_duration_minutes / valid, f64::from(self.short_calls) / valid * 100.0)
        };

        CallAggregate {
            name,
            total_calls: self.total_calls,
            valid_calls: self.valid_calls,
            avg_duration_min: round_to(avg, 2),
            total_duration_minutes: round_to(self.total_duration_minutes, 2),
            total_duration_hours: round_to(
                round_to(minutes_to_hours(self.total_duration_minutes), 2),
                2,
            ),
            short_calls: self.short_calls,
            short_pct: round_to(short_pct, 2),
            minute_buckets: self.minute_buckets,
            gt10: self.gt10,
            g1to3: self.group_total(BucketGroup::OneToThree),
            g4to6: self.group_total(BucketGroup::FourToSix),
            g7to10: self.group_total(BucketGroup::SevenToTen),
        }
    }
}

impl Accumulator for CallTotals {
    fn merge(&mut self, other: Self) {
        self.total_calls += other.total_calls;
        self.valid_calls += other.valid_calls;
        self.total_duration_minutes += other.total_duration_minutes;
        self.short_calls += other.short_calls;
        for (mine, theirs) in self.minute_buckets.iter_mut().zip(other.minute_buckets) {
            *mine += theirs;
        }
        self.gt10 += other.gt10;
    }
}

/// Call totals keyed by trimmed monitor name, skipping unnamed calls
pub fn call_totals(
    records: &[CallRecord],
    short_call_threshold: f64,
) -> OrderedGroups<CallTotals> {
    records
        .iter()
        .filter_map(|r| {
            let name = r.monitored_by.trim();
            (!name.is_empty()).then(|| (name, CallTotals::from_record(r, short_call_threshold)))
        })
        .collect()
}

/// One aggregate per monitoring employee, in first-seen order
pub fn aggregate_calls(records: &[CallRecord], short_call_threshold: f64) -> Vec<CallAggregate> {
    call_totals(records, short_call_threshold)
        .into_entries()
        .into_iter()
        .map(|(name, totals)| totals.finish(name))
        .collect()
}
