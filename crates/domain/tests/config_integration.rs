//! Integration tests for engine configuration and report value types
//!
//! Covers the config shapes deployments actually write (TOML and JSON,
//! partial and full) and the JSON contract of the report values.

use opsboard_domain::fields::{calls as cf, utilization as uf};
use opsboard_domain::{
    CallAggregate, DatePreset, EngineConfig, FilterCriteria, LeaveSortMode, OpsBoardError,
    SortDirection, TaskKind, UtilizationReportRequest, UtilizationStatus,
};

// ============================================================================
// EngineConfig
// ============================================================================

/// Scenario: a deployment only adds a leave label and a new date column
#[test]
fn test_partial_toml_config_layers_over_defaults() {
    let config: EngineConfig = toml::from_str(
        r#"
        leave_shifts = ["sick", "annual", "casual", "maternity"]

        [utilization_aliases]
        date = ["Day", "Date"]
        "#,
    )
    .expect("valid toml");

    assert_eq!(config.leave_shifts.len(), 4);
    assert!(config.leave_shifts.iter().any(|s| s == "maternity"));
    assert_eq!(
        config.utilization_aliases.labels(uf::DATE),
        ["Day".to_string(), "Date".to_string()]
    );
    // Untouched tables and scalars keep their defaults
    assert_eq!(config.utilization_aliases.labels(uf::EMPLOYEE)[1], "Name");
    assert_eq!(config.call_aliases.labels(cf::CALL_DATE)[0], "Call Date");
    assert_eq!(config.default_day_minutes, 480.0);
    assert_eq!(config.max_header_columns, 60);
    assert!(config.validate().is_ok());
}

#[test]
fn test_full_config_roundtrips_through_json() {
    let original = EngineConfig::default();
    let json = serde_json::to_string(&original).expect("serialize");
    let back: EngineConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, original);
}

#[test]
fn test_negative_threshold_fails_validation() {
    let config: EngineConfig =
        serde_json::from_str(r#"{"short_call_threshold_minutes": -1}"#).expect("valid json");
    match config.validate() {
        Err(OpsBoardError::Config(msg)) => assert!(msg.contains("short_call_threshold_minutes")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_weights_cover_every_task_kind() {
    let config = EngineConfig::default();
    let total: f64 = TaskKind::ALL.iter().map(|k| config.task_weights.weight(*k)).sum();
    assert_eq!(total, 15.0 + 10.0 + 30.0 + 30.0 + 15.0 + 12.0 + 45.0 + 10.0);
}

// ============================================================================
// Report values
// ============================================================================

#[test]
fn test_report_request_from_ui_json() {
    let request: UtilizationReportRequest = serde_json::from_str(
        r#"{
            "filter": { "employee": "Mona", "preset": "7days" },
            "recordSort": { "key": "publicUtilizationPct", "direction": "desc" },
            "leaveSort": "nameAsc"
        }"#,
    )
    .expect("valid request");

    let expected =
        FilterCriteria::default().for_employee("Mona").with_preset(DatePreset::LastSevenDays);
    assert_eq!(request.filter, expected);
    let sort = request.record_sort.expect("sort present");
    assert_eq!(sort.key, "publicUtilizationPct");
    assert_eq!(sort.direction, SortDirection::Desc);
    assert_eq!(request.leave_sort, LeaveSortMode::NameAsc);
}

#[test]
fn test_call_aggregate_json_contract() {
    let aggregate = CallAggregate {
        name: "Ali".into(),
        total_calls: 4,
        valid_calls: 3,
        avg_duration_min: 4.5,
        total_duration_minutes: 13.5,
        total_duration_hours: 0.23,
        short_calls: 1,
        short_pct: 33.33,
        minute_buckets: [1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        gt10: 1,
        g1to3: 1,
        g4to6: 0,
        g7to10: 1,
    };

    let json = serde_json::to_value(&aggregate).expect("serialize");
    for key in ["name", "totalCalls", "validCalls", "shortPct", "minuteBuckets", "gt10", "g7to10"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["minuteBuckets"].as_array().map(Vec::len), Some(10));
}

#[test]
fn test_status_roundtrip_through_labels() {
    for status in [
        UtilizationStatus::Low,
        UtilizationStatus::Normal,
        UtilizationStatus::Good,
        UtilizationStatus::Excellent,
    ] {
        assert_eq!(status.to_string().parse::<UtilizationStatus>(), Ok(status));
    }
}
