//! Application constants
//!
//! Centralized location for all domain-level constants. Most of these are
//! the defaults behind [`crate::config::EngineConfig`]; the engine itself
//! reads the injected config, not these values.

// Capacity defaults
pub const DEFAULT_DAY_MINUTES: f64 = 480.0;

// Call classification
pub const SHORT_CALL_THRESHOLD_MIN: f64 = 2.0;
pub const MAX_MINUTE_BUCKET: usize = 10;

// Spreadsheet serial dates count days from 1899-12-30; 25569 is 1970-01-01
pub const SPREADSHEET_EPOCH_OFFSET_DAYS: f64 = 25_569.0;
pub const MILLIS_PER_DAY: f64 = 86_400.0 * 1_000.0;

// Ratios at or below this are fractions/multipliers, above are percentages
pub const RATIO_PERCENT_CEILING: f64 = 3.0;

// Ingestion limits
pub const MAX_ROWS_PER_SHEET: usize = 50_000;
pub const MAX_HEADER_COLUMNS: usize = 60;

pub const DEFAULT_LEAVE_SHIFTS: [&str; 8] =
    ["sick", "annual", "casual", "off", "vacation", "permission", "instead of", "mission"];

pub const DATE_HEADER_TOKENS: [&str; 2] = ["date", "تاريخ"];
pub const NAME_HEADER_TOKENS: [&str; 2] = ["name", "اسم الموظف"];

// Filter / report sentinels
pub const ALL_EMPLOYEES: &str = "all";
pub const NO_PERFORMER: &str = "-";
pub const OTHER_TASKS_LABEL: &str = "Other Tasks (Min)";
