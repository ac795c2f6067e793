//! Record filtering by employee and date range
//!
//! [`FilterEngine`] resolves a [`FilterCriteria`] against today's date into
//! a [`ResolvedFilter`], which then tests any [`Filterable`] record. The same
//! rules apply to utilization and call records:
//! - the employee test is exact equality unless the criterion is `"all"`
//! - records without a date always pass the date test
//! - records whose date cannot be read fail it while a range is active

pub mod ports;

use std::sync::Arc;

use chrono::{Datelike, Days, Months, NaiveDate};
use opsboard_domain::{CallRecord, DatePreset, DateRange, FilterCriteria, UtilizationRecord};
use tracing::debug;

pub use ports::{Clock, FixedClock};

/// Records the filter engine can test
pub trait Filterable {
    /// Employee the record belongs to
    fn employee_key(&self) -> &str;

    /// Normalized date text, empty when unknown
    fn date_key(&self) -> &str;
}

impl Filterable for UtilizationRecord {
    fn employee_key(&self) -> &str {
        &self.employee
    }

    fn date_key(&self) -> &str {
        &self.date
    }
}

impl Filterable for CallRecord {
    fn employee_key(&self) -> &str {
        &self.monitored_by
    }

    fn date_key(&self) -> &str {
        &self.call_date
    }
}

/// Reads a record date: ISO `YYYY-MM-DD` (with anything after it), then
/// `MM/DD/YYYY`, then `YYYY/MM/DD`
pub fn parse_record_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    date.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .or_else(|| NaiveDate::parse_from_str(date, "%m/%d/%Y").ok())
        .or_else(|| NaiveDate::parse_from_str(date, "%Y/%m/%d").ok())
}

/// Criteria with the date preset pinned to concrete dates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedFilter {
    /// `None` matches every employee
    pub employee: Option<String>,
    /// `None` disables the date test
    pub range: Option<DateRange>,
}

impl ResolvedFilter {
    pub fn matches<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        if let Some(employee) = &self.employee {
            if record.employee_key() != employee {
                return false;
            }
        }

        match (&self.range, record.date_key()) {
            (None, _) | (Some(_), "") => true,
            (Some(range), date) => parse_record_date(date).is_some_and(|d| range.contains(d)),
        }
    }
}

/// Resolves filter criteria and applies them to record slices
#[derive(Clone)]
pub struct FilterEngine {
    clock: Arc<dyn Clock>,
}

impl FilterEngine {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Pins relative presets to today's date
    pub fn resolve(&self, criteria: &FilterCriteria) -> ResolvedFilter {
        let employee = (!criteria.is_all_employees()).then(|| criteria.employee.clone());
        let range = preset_range(criteria, self.clock.today());
        ResolvedFilter { employee, range }
    }

    /// Records matching `criteria`, in input order
    pub fn apply<T>(&self, records: &[T], criteria: &FilterCriteria) -> Vec<T>
    where
        T: Filterable + Clone,
    {
        let resolved = self.resolve(criteria);
        let kept: Vec<T> = records.iter().filter(|r| resolved.matches(*r)).cloned().collect();
        debug!(
            input = records.len(),
            kept = kept.len(),
            employee = %criteria.employee,
            preset = %criteria.preset,
            "Applied record filter"
        );
        kept
    }
}

/// Inclusive range for a preset; `None` means no date restriction
pub fn preset_range(criteria: &FilterCriteria, today: NaiveDate) -> Option<DateRange> {
    match criteria.preset {
        DatePreset::All => None,
        DatePreset::Today => Some(DateRange::new(today, today)),
        DatePreset::LastSevenDays => {
            let from = today.checked_sub_days(Days::new(6)).unwrap_or(NaiveDate::MIN);
            Some(DateRange::new(from, today))
        }
        DatePreset::ThisMonth => month_range(today),
        DatePreset::LastMonth => {
            first_of_month(today).checked_sub_months(Months::new(1)).and_then(month_range)
        }
        DatePreset::Custom => match (criteria.from, criteria.to) {
            (Some(from), Some(to)) => Some(DateRange::new(from, to)),
            _ => None,
        },
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn month_range(date: NaiveDate) -> Option<DateRange> {
    let first = first_of_month(date);
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some(DateRange::new(first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn engine(today: NaiveDate) -> FilterEngine {
        FilterEngine::new(Arc::new(FixedClock(today)))
    }

    fn call(name: &str, date: &str) -> CallRecord {
        CallRecord {
            monitored_by: name.into(),
            duration_minutes: 1.0,
            call_date: date.into(),
            raw_duration: "1".into(),
            sheet_name: "Calls".into(),
        }
    }

    fn range_for(preset: DatePreset, today: NaiveDate) -> Option<DateRange> {
        preset_range(&FilterCriteria::default().with_preset(preset), today)
    }

    #[test]
    fn test_preset_ranges() {
        let today = d(2024, 3, 15);
        assert_eq!(range_for(DatePreset::All, today), None);
        assert_eq!(range_for(DatePreset::Today, today), Some(DateRange::new(today, today)));
        assert_eq!(
            range_for(DatePreset::LastSevenDays, today),
            Some(DateRange::new(d(2024, 3, 9), today))
        );
        assert_eq!(
            range_for(DatePreset::ThisMonth, today),
            Some(DateRange::new(d(2024, 3, 1), d(2024, 3, 31)))
        );
        assert_eq!(
            range_for(DatePreset::LastMonth, today),
            Some(DateRange::new(d(2024, 2, 1), d(2024, 2, 29)))
        );
    }

    #[test]
    fn test_last_month_crosses_year() {
        assert_eq!(
            range_for(DatePreset::LastMonth, d(2024, 1, 31)),
            Some(DateRange::new(d(2023, 12, 1), d(2023, 12, 31)))
        );
    }

    #[test]
    fn test_custom_needs_both_bounds() {
        let today = d(2024, 3, 15);
        let half = FilterCriteria { from: Some(d(2024, 3, 1)), ..FilterCriteria::default() }
            .with_preset(DatePreset::Custom);
        assert_eq!(preset_range(&half, today), None);

        let full = FilterCriteria::default().between(d(2024, 3, 1), d(2024, 3, 5));
        assert_eq!(preset_range(&full, today), Some(DateRange::new(d(2024, 3, 1), d(2024, 3, 5))));
    }

    #[test]
    fn test_employee_filter() {
        let records = vec![call("Ali", ""), call("Mona", ""), call("ali", "")];
        let engine = engine(d(2024, 3, 15));

        let all = engine.apply(&records, &FilterCriteria::default());
        assert_eq!(all.len(), 3);

        let ali = engine.apply(&records, &FilterCriteria::default().for_employee("Ali"));
        assert_eq!(ali.len(), 1);
        assert!(ali.iter().all(|r| r.monitored_by == "Ali"));
    }

    #[test]
    fn test_date_filter_keeps_undated_and_drops_unreadable() {
        let records = vec![
            call("Ali", "2024-03-14"),
            call("Ali", "2024-02-01"),
            call("Ali", ""),
            call("Ali", "sometime"),
            call("Ali", "03/15/2024"),
        ];
        let engine = engine(d(2024, 3, 15));

        let criteria = FilterCriteria::default().with_preset(DatePreset::LastSevenDays);
        let week = engine.apply(&records, &criteria);
        let dates: Vec<&str> = week.iter().map(|r| r.call_date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-14", "", "03/15/2024"]);

        // Without a range even unreadable dates pass
        assert_eq!(engine.apply(&records, &FilterCriteria::default()).len(), 5);
    }

    #[test]
    fn test_parse_record_date_formats() {
        assert_eq!(parse_record_date("2024-03-01"), Some(d(2024, 3, 1)));
        assert_eq!(parse_record_date("2024-03-01T10:00:00"), Some(d(2024, 3, 1)));
        assert_eq!(parse_record_date("03/01/2024"), Some(d(2024, 3, 1)));
        assert_eq!(parse_record_date("2024/03/01"), Some(d(2024, 3, 1)));
        assert_eq!(parse_record_date("2024-13-01"), None);
        assert_eq!(parse_record_date("يوم"), None);
    }
}
