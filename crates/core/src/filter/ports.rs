//! Port interfaces for the filter engine

use chrono::NaiveDate;

/// Source of "today" for relative date presets
pub trait Clock: Send + Sync {
    /// Current calendar date in the reporting time zone
    fn today(&self) -> NaiveDate;
}

/// Clock pinned to one date, for tests and reproducible reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
