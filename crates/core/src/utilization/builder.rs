//! Utilization record builder
//!
//! Turns one raw utilization row into a [`UtilizationRecord`]. Every derived
//! figure prefers the value the sheet already carries and falls back to
//! computing it from the task counts and the configured day length.
//!
//! # Derivation order
//! 1. Leave detection from the shift label
//! 2. Paid and business day (explicit, else 0 on leave, else the default day)
//! 3. Monitoring minutes (explicit, else weighted task counts)
//! 4. Task minutes (explicit, else "other tasks" minutes)
//! 5. Overall minutes (explicit, else monitoring + tasks + training day)
//! 6. Leave days zero out steps 3 to 5
//! 7. Accuracy, internal and public utilization as percentages
//! 8. Status band and monitoring/tasks shares

use opsboard_domain::fields::utilization as f;
use opsboard_domain::{
    CellValue, EngineConfig, RawRow, TaskDetail, TaskKind, UtilizationRecord, UtilizationStatus,
};

use crate::normalize::scalars::{
    is_leave_shift, normalize_date, ratio_to_percent, round_to, to_number,
};
use crate::normalize::AliasResolver;
use crate::utils::Fallback;

/// Builds utilization records against one engine configuration
#[derive(Debug, Clone, Copy)]
pub struct UtilizationRecordBuilder<'a> {
    config: &'a EngineConfig,
    resolver: AliasResolver<'a>,
}

impl<'a> UtilizationRecordBuilder<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config, resolver: AliasResolver::new(&config.utilization_aliases) }
    }

    /// Record for `row`, or `None` when the row names neither an employee
    /// nor a date
    pub fn build(&self, row: &RawRow, sheet_name: &str) -> Option<UtilizationRecord> {
        let employee_cell = self.field(row, f::EMPLOYEE);
        let date_cell = self.field(row, f::DATE);
        if employee_cell.is_blank_or_zero() && date_cell.is_blank_or_zero() {
            return None;
        }

        let employee = employee_cell.to_trimmed_string();
        let date = normalize_date(date_cell);
        if employee.is_empty() && date.is_empty() {
            return None;
        }

        let shift = self.field(row, f::SHIFT).to_trimmed_string();
        let is_leave = is_leave_shift(&shift, &self.config.leave_shifts);
        let day = self.config.default_day_minutes;
        let capacity_default = if is_leave { 0.0 } else { day };

        let paid_day_minutes =
            Fallback::from(self.number(row, f::PAID_DAY)).or(capacity_default).value();
        let business_day_minutes =
            Fallback::from(self.number(row, f::BUSINESS_DAY)).or(capacity_default).value();
        let adhoc_minutes = self.number(row, f::ADHOC);

        let task_details = self.task_details(row);
        let other_tasks_minutes = self.number(row, f::OTHER_TASKS);
        let full_day_training = self.number(row, f::FULL_DAY_TRAINING) == 1.0;

        let mut actual_monitoring_minutes =
            Fallback::from(self.number(row, f::ACTUAL_MONITORING_TIME))
                .or_else(|| task_details.iter().map(|d| d.minutes).sum())
                .value();
        let mut actual_tasks_minutes =
            Fallback::from(self.number(row, f::ACTUAL_TASKS_TIME)).or(other_tasks_minutes).value();
        let training_minutes = if full_day_training { day } else { 0.0 };
        let mut overall_actual_minutes = Fallback::from(self.number(row, f::OVERALL_ACTUAL_TIME))
            .or_else(|| actual_monitoring_minutes + actual_tasks_minutes + training_minutes)
            .value();

        if is_leave {
            actual_monitoring_minutes = 0.0;
            actual_tasks_minutes = 0.0;
            overall_actual_minutes = 0.0;
        }

        let worked = overall_actual_minutes + adhoc_minutes;
        let accuracy = Fallback::from(self.number(row, f::ACCURACY))
            .or_else(|| safe_ratio(overall_actual_minutes, paid_day_minutes))
            .value();
        let internal = Fallback::from(self.number(row, f::INTERNAL_UTILIZATION))
            .or_else(|| safe_ratio(worked, business_day_minutes))
            .value();
        let public = Fallback::from(self.number(row, f::PUBLIC_UTILIZATION))
            .or_else(|| safe_ratio(worked, paid_day_minutes))
            .value();

        let public_pct = ratio_to_percent(public);
        // Banding uses the unrounded percentage
        let status = UtilizationStatus::from_public_pct(public_pct);

        let monitoring_share =
            safe_ratio(actual_monitoring_minutes, overall_actual_minutes) * 100.0;
        let tasks_share = safe_ratio(actual_tasks_minutes, overall_actual_minutes) * 100.0;

        Some(UtilizationRecord {
            employee,
            date,
            shift,
            sheet_name: sheet_name.to_string(),
            task_details,
            other_tasks_minutes,
            other_tasks_comment: self.field(row, f::OTHER_TASKS_COMMENT).to_trimmed_string(),
            full_day_training,
            paid_day_minutes,
            business_day_minutes,
            adhoc_minutes,
            actual_monitoring_minutes,
            actual_tasks_minutes,
            overall_actual_minutes,
            accuracy_pct: round_to(ratio_to_percent(accuracy), 1),
            internal_utilization_pct: round_to(ratio_to_percent(internal), 1),
            public_utilization_pct: round_to(public_pct, 1),
            monitoring_share_pct: round_to(monitoring_share, 1),
            tasks_share_pct: round_to(tasks_share, 1),
            is_leave,
            status,
        })
    }

    fn task_details(&self, row: &RawRow) -> Vec<TaskDetail> {
        TaskKind::ALL
            .into_iter()
            .map(|kind| {
                let count = self.number(row, kind.field());
                TaskDetail { kind, count, minutes: count * self.config.task_weights.weight(kind) }
            })
            .collect()
    }

    fn field<'r>(&self, row: &'r RawRow, field: &str) -> &'r CellValue {
        self.resolver.resolve(row, field)
    }

    fn number(&self, row: &RawRow, field: &str) -> f64 {
        to_number(self.field(row, field))
    }
}

/// `numerator / denominator`, 0 for a zero denominator
fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(row: RawRow) -> UtilizationRecord {
        let config = EngineConfig::default();
        UtilizationRecordBuilder::new(&config).build(&row, "Daily").unwrap()
    }

    fn base_row() -> RawRow {
        RawRow::new().with("Date", "2024-03-01").with("Shift", "Morning").with("Name", "Ali")
    }

    #[test]
    fn test_monitoring_minutes_from_weighted_tasks() {
        let record =
            build(base_row().with("Voice - What's App", 10).with("Actual Monitoring time", ""));

        assert_eq!(record.actual_monitoring_minutes, 150.0);
        assert_eq!(record.task_minutes(TaskKind::VoiceWhatsapp), 150.0);
        assert_eq!(record.task_count(TaskKind::VoiceWhatsapp), 10.0);
        assert_eq!(record.paid_day_minutes, 480.0);
        assert_eq!(record.business_day_minutes, 480.0);
        assert_eq!(record.overall_actual_minutes, 150.0);
        // 150 / 480 = 0.3125 -> 31.25% -> 31.3
        assert_eq!(record.public_utilization_pct, 31.3);
        assert_eq!(record.status, UtilizationStatus::Low);
        assert_eq!(record.monitoring_share_pct, 100.0);
        assert_eq!(record.tasks_share_pct, 0.0);
    }

    #[test]
    fn test_explicit_values_win() {
        let record = build(
            base_row()
                .with("VIP", 10)
                .with("Actual Monitoring Time (Min)", 200)
                .with("Actual Tasks time", 100)
                .with("Overall Actual time", 456)
                .with("Public Utilization", "0.95")
                .with("Acurracy", 97),
        );

        assert_eq!(record.actual_monitoring_minutes, 200.0);
        assert_eq!(record.actual_tasks_minutes, 100.0);
        assert_eq!(record.overall_actual_minutes, 456.0);
        assert_eq!(record.public_utilization_pct, 95.0);
        assert_eq!(record.accuracy_pct, 97.0);
        assert_eq!(record.status, UtilizationStatus::Good);
    }

    #[test]
    fn test_leave_day_forces_zero_actuals() {
        let record = build(
            RawRow::new()
                .with("Date", "2024-03-01")
                .with("Shift", " Sick ")
                .with("Name", "Ali")
                .with("VIP", 5)
                .with("Overall Actual time", 300),
        );

        assert!(record.is_leave);
        assert_eq!(record.actual_monitoring_minutes, 0.0);
        assert_eq!(record.actual_tasks_minutes, 0.0);
        assert_eq!(record.overall_actual_minutes, 0.0);
        assert_eq!(record.paid_day_minutes, 0.0);
        assert_eq!(record.business_day_minutes, 0.0);
        assert_eq!(record.public_utilization_pct, 0.0);
        assert_eq!(record.monitoring_share_pct, 0.0);
        // Raw counts are still recorded
        assert_eq!(record.task_count(TaskKind::Vip), 5.0);
    }

    #[test]
    fn test_full_day_training_adds_a_day() {
        let record = build(base_row().with("Training", 1).with("Other Tasks (Min)", 60));
        assert!(record.full_day_training);
        assert_eq!(record.actual_tasks_minutes, 60.0);
        assert_eq!(record.overall_actual_minutes, 540.0);
        assert_eq!(record.public_utilization_pct, 112.5);
        assert_eq!(record.status, UtilizationStatus::Excellent);

        let not_training = build(base_row().with("Training", 2));
        assert!(!not_training.full_day_training);
    }

    #[test]
    fn test_adhoc_counts_toward_utilization() {
        let record = build(
            base_row()
                .with("Overall Actual time", 400)
                .with("Ad-Hoc", 32)
                .with("Business day", 432),
        );
        // (400 + 32) / 480 = 0.9, (400 + 32) / 432 = 1.0, 400 / 480 = 0.8333
        assert_eq!(record.public_utilization_pct, 90.0);
        assert_eq!(record.internal_utilization_pct, 100.0);
        assert_eq!(record.accuracy_pct, 83.3);
        assert_eq!(record.status, UtilizationStatus::Good);
    }

    #[test]
    fn test_status_uses_unrounded_percentage() {
        // 0.8998 -> 89.98% rounds to 90.0 for display but bands as normal
        let record = build(base_row().with("Public Utilization", 0.8998));
        assert_eq!(record.public_utilization_pct, 90.0);
        assert_eq!(record.status, UtilizationStatus::Normal);
    }

    #[test]
    fn test_rows_without_identity_are_skipped() {
        let config = EngineConfig::default();
        let builder = UtilizationRecordBuilder::new(&config);
        assert!(builder.build(&RawRow::new().with("VIP", 3), "Daily").is_none());
        assert!(builder.build(&RawRow::new().with("Name", "Ali"), "Daily").is_some());
        assert!(builder.build(&RawRow::new().with("Date", 45352), "Daily").is_some());
    }

    #[test]
    fn test_zero_paid_day_means_zero_ratios() {
        let record = build(RawRow::new().with("Name", "Ali").with("Shift", "off").with("VIP", 1));
        assert_eq!(record.paid_day_minutes, 0.0);
        assert_eq!(record.accuracy_pct, 0.0);
        assert_eq!(record.public_utilization_pct, 0.0);
        assert_eq!(record.sheet_name, "Daily");
    }

    #[test]
    fn test_weights_come_from_config() {
        let mut config = EngineConfig::default();
        config.task_weights.vip = 20.0;
        let record = UtilizationRecordBuilder::new(&config)
            .build(&base_row().with("VIP", 3), "Daily")
            .unwrap();
        assert_eq!(record.actual_monitoring_minutes, 60.0);
    }
}
