//! Minute buckets for call durations
//!
//! A valid call lands in the bucket of its whole minutes, with anything
//! under two minutes in bucket 1: `0:01..1:59` is `m1`, `2:00..2:59` is `m2`,
//! and so on up to `m10`. Longer calls go to `gt10`.

use opsboard_domain::constants::MAX_MINUTE_BUCKET;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinuteBucket {
    /// 1-based whole-minute bucket, `1..=10`
    Minute(usize),
    OverTen,
}

impl MinuteBucket {
    /// Coarse group of a bucket: 1-3, 4-6 or 7-10 minutes
    pub fn group(self) -> BucketGroup {
        match self {
            Self::Minute(1..=3) => BucketGroup::OneToThree,
            Self::Minute(4..=6) => BucketGroup::FourToSix,
            Self::Minute(_) => BucketGroup::SevenToTen,
            Self::OverTen => BucketGroup::OverTen,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketGroup {
    OneToThree,
    FourToSix,
    SevenToTen,
    OverTen,
}

/// Bucket of a call, `None` unless the duration is positive
pub fn minute_bucket(duration_minutes: f64) -> Option<MinuteBucket> {
    if duration_minutes.is_nan() || duration_minutes <= 0.0 {
        return None;
    }
    // Saturating float-to-int cast; anything huge is simply OverTen
    let whole = (duration_minutes.floor() as usize).max(1);
    if whole > MAX_MINUTE_BUCKET {
        Some(MinuteBucket::OverTen)
    } else {
        Some(MinuteBucket::Minute(whole))
    }
}
