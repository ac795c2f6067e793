//! Canonical field names
//!
//! These are the schema-stable keys of the alias tables. Source files label
//! their columns however they like; the alias tables map each canonical name
//! below to the labels seen in the wild.

/// Canonical fields of a daily utilization sheet.
pub mod utilization {
    pub const DATE: &str = "date";
    pub const SHIFT: &str = "shift";
    pub const EMPLOYEE: &str = "employee";
    pub const FULL_DAY_TRAINING: &str = "fullDayTraining";

    pub const VOICE_WHATSAPP: &str = "voice_whatsapp";
    pub const ADB_RETENTION_OMU: &str = "adb_retention_omu";
    pub const VIP: &str = "vip";
    pub const COMPLAINT: &str = "complaint";
    pub const APPLICATION: &str = "application";
    pub const MYSTERY_CALLS: &str = "mystery_calls";
    pub const ADB_TRANSACTION: &str = "adb_transaction";
    pub const COACHING: &str = "coaching";

    pub const OTHER_TASKS: &str = "otherTasks";
    pub const OTHER_TASKS_COMMENT: &str = "otherTasksComment";

    pub const PAID_DAY: &str = "paidDay";
    pub const BUSINESS_DAY: &str = "businessDay";
    pub const ADHOC: &str = "adhoc";

    pub const ACTUAL_MONITORING_TIME: &str = "actualMonitoringTime";
    pub const ACTUAL_TASKS_TIME: &str = "actualTasksTime";
    pub const OVERALL_ACTUAL_TIME: &str = "overallActualTime";

    pub const ACCURACY: &str = "accuracy";
    pub const INTERNAL_UTILIZATION: &str = "internalUtilization";
    pub const PUBLIC_UTILIZATION: &str = "publicUtilization";
}

/// Canonical fields of a call-monitoring log.
pub mod calls {
    pub const MONITORED_BY: &str = "monitoredBy";
    pub const DURATION: &str = "duration";
    pub const CALL_DATE: &str = "callDate";
}
