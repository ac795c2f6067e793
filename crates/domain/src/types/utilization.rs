//! Daily utilization records
//!
//! One [`UtilizationRecord`] per employee-day, derived from a utilization
//! sheet row. Records are built once by the core record builder and never
//! mutated afterwards; recomputation means rebuilding from the raw row.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::fields::utilization as f;
use crate::impl_domain_label_conversions;

/* -------------------------------------------------------------------------- */
/* Task kinds */
/* -------------------------------------------------------------------------- */

/// The eight weighted task categories of a utilization sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    VoiceWhatsapp,
    AdbRetentionOmu,
    Vip,
    Complaint,
    Application,
    MysteryCalls,
    AdbTransaction,
    Coaching,
}

impl TaskKind {
    /// All kinds, in report order
    pub const ALL: [Self; 8] = [
        Self::VoiceWhatsapp,
        Self::AdbRetentionOmu,
        Self::Vip,
        Self::Complaint,
        Self::Application,
        Self::MysteryCalls,
        Self::AdbTransaction,
        Self::Coaching,
    ];

    /// Canonical field holding the count for this kind
    pub fn field(self) -> &'static str {
        match self {
            Self::VoiceWhatsapp => f::VOICE_WHATSAPP,
            Self::AdbRetentionOmu => f::ADB_RETENTION_OMU,
            Self::Vip => f::VIP,
            Self::Complaint => f::COMPLAINT,
            Self::Application => f::APPLICATION,
            Self::MysteryCalls => f::MYSTERY_CALLS,
            Self::AdbTransaction => f::ADB_TRANSACTION,
            Self::Coaching => f::COACHING,
        }
    }

    /// Column heading used in the task-hours report
    pub fn label(self) -> &'static str {
        match self {
            Self::VoiceWhatsapp => "Voice - What's App",
            Self::AdbRetentionOmu => "ADB , Retention , OMU and Social Media",
            Self::Vip => "VIP",
            Self::Complaint => "Complaint",
            Self::Application => "Application",
            Self::MysteryCalls => "Mysetry Calls",
            Self::AdbTransaction => "ADB Transcation",
            Self::Coaching => "Coaching",
        }
    }

    /// Reverse of [`TaskKind::field`]
    pub fn from_field(field: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.field() == field)
    }
}

/// Count and weighted minutes of one task kind on one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    pub kind: TaskKind,
    pub count: f64,
    pub minutes: f64,
}

/* -------------------------------------------------------------------------- */
/* Status bands */
/* -------------------------------------------------------------------------- */

/// Performance band derived from public utilization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum UtilizationStatus {
    Low,
    Normal,
    Good,
    Excellent,
}

impl_domain_label_conversions!(UtilizationStatus {
    Low => "low",
    Normal => "normal",
    Good => "good",
    Excellent => "excellent",
});

/// One row of the status table: values above `floor` (or equal to it when
/// `inclusive`) get `status`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusBand {
    pub floor: f64,
    pub inclusive: bool,
    pub status: UtilizationStatus,
}

/// Status bands, highest first. Anything below the last floor is `Low`.
///
/// `[85, 90)` normal, `[90, 95]` good, `> 95` excellent.
pub const STATUS_BANDS: [StatusBand; 3] = [
    StatusBand { floor: 95.0, inclusive: false, status: UtilizationStatus::Excellent },
    StatusBand { floor: 90.0, inclusive: true, status: UtilizationStatus::Good },
    StatusBand { floor: 85.0, inclusive: true, status: UtilizationStatus::Normal },
];

impl UtilizationStatus {
    /// Band for a public utilization percentage
    pub fn from_public_pct(public_pct: f64) -> Self {
        STATUS_BANDS
            .iter()
            .find(|band| {
                if band.inclusive {
                    public_pct >= band.floor
                } else {
                    public_pct > band.floor
                }
            })
            .map_or(Self::Low, |band| band.status)
    }
}

/* -------------------------------------------------------------------------- */
/* Utilization record */
/* -------------------------------------------------------------------------- */

/// Derived metrics for one employee-day
///
/// # Field Invariants
/// - `is_leave` implies all three `actual_*_minutes` fields are 0
/// - percentages are rounded to one decimal place, minutes are not rounded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct UtilizationRecord {
    // Identity
    pub employee: String,
    /// ISO `YYYY-MM-DD` when the source date was recognizable
    pub date: String,
    pub shift: String,
    pub sheet_name: String,

    // Raw task inputs
    pub task_details: Vec<TaskDetail>,
    pub other_tasks_minutes: f64,
    pub other_tasks_comment: String,
    pub full_day_training: bool,

    // Capacity
    pub paid_day_minutes: f64,
    pub business_day_minutes: f64,
    pub adhoc_minutes: f64,

    // Derived time
    pub actual_monitoring_minutes: f64,
    pub actual_tasks_minutes: f64,
    pub overall_actual_minutes: f64,

    // Derived ratios
    pub accuracy_pct: f64,
    pub internal_utilization_pct: f64,
    pub public_utilization_pct: f64,
    pub monitoring_share_pct: f64,
    pub tasks_share_pct: f64,

    pub is_leave: bool,
    pub status: UtilizationStatus,
}

impl UtilizationRecord {
    /// Count reported for a task kind (0 when absent)
    pub fn task_count(&self, kind: TaskKind) -> f64 {
        self.task_details.iter().find(|d| d.kind == kind).map_or(0.0, |d| d.count)
    }

    /// Weighted minutes for a task kind (0 when absent)
    pub fn task_minutes(&self, kind: TaskKind) -> f64 {
        self.task_details.iter().find(|d| d.kind == kind).map_or(0.0, |d| d.minutes)
    }

    /// Sum of weighted minutes over all task kinds
    pub fn weighted_task_minutes(&self) -> f64 {
        self.task_details.iter().map(|d| d.minutes).sum()
    }
}
