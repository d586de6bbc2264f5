use super::*;

// =============================================================
// count_active_tasks
// =============================================================

#[test]
fn done_tasks_are_not_active() {
    let rows = vec![
        serde_json::json!({"id": 1, "status": "todo"}),
        serde_json::json!({"id": 2, "status": "in_progress"}),
        serde_json::json!({"id": 3, "status": "done"}),
    ];
    assert_eq!(count_active_tasks(&rows), 2);
}

#[test]
fn tasks_without_a_status_count_as_active() {
    let rows = vec![serde_json::json!({"id": 1})];
    assert_eq!(count_active_tasks(&rows), 1);
}

#[test]
fn no_tasks_means_no_active_tasks() {
    assert_eq!(count_active_tasks(&[]), 0);
}

// =============================================================
// sum_amounts
// =============================================================

#[test]
fn amounts_sum_across_numbers_and_decimal_strings() {
    let rows = vec![
        serde_json::json!({"amount": "120.50"}),
        serde_json::json!({"amount": 30}),
        serde_json::json!({"amount": "9.50"}),
    ];
    let total = sum_amounts(&rows, "amount");
    assert!((total - 160.0).abs() < f64::EPSILON);
}

#[test]
fn unparsable_amounts_are_skipped() {
    let rows = vec![
        serde_json::json!({"amount": "oops"}),
        serde_json::json!({"amount": serde_json::Value::Null}),
        serde_json::json!({"amount": "10"}),
    ];
    let total = sum_amounts(&rows, "amount");
    assert!((total - 10.0).abs() < f64::EPSILON);
}

#[test]
fn default_stats_are_zeroed() {
    let stats = DashboardStats::default();
    assert_eq!(stats.active_tasks, 0);
    assert!((stats.total_income - 0.0).abs() < f64::EPSILON);
}
