//! Call record builder

use opsboard_domain::fields::calls as f;
use opsboard_domain::{CallRecord, EngineConfig, RawRow};

use crate::normalize::scalars::{normalize_date, parse_duration_to_minutes};
use crate::normalize::AliasResolver;

/// Builds call records against one engine configuration
#[derive(Debug, Clone, Copy)]
pub struct CallRecordBuilder<'a> {
    resolver: AliasResolver<'a>,
}

impl<'a> CallRecordBuilder<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { resolver: AliasResolver::new(&config.call_aliases) }
    }

    /// Record for `row`, or `None` when monitor, duration and date are all
    /// missing
    ///
    /// Rows with a blank monitor are kept; aggregation skips them later.
    pub fn build(&self, row: &RawRow, sheet_name: &str) -> Option<CallRecord> {
        let monitored_by = self.resolver.resolve(row, f::MONITORED_BY);
        let duration = self.resolver.resolve(row, f::DURATION);
        let call_date = self.resolver.resolve(row, f::CALL_DATE);

        if monitored_by.is_blank_or_zero()
            && duration.is_blank_or_zero()
            && call_date.is_blank_or_zero()
        {
            return None;
        }

        Some(CallRecord {
            monitored_by: monitored_by.to_trimmed_string(),
            duration_minutes: parse_duration_to_minutes(duration).max(0.0),
            call_date: normalize_date(call_date),
            raw_duration: duration.as_text().into_owned(),
            sheet_name: sheet_name.to_string(),
        })
    }
}
