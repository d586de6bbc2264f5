use super::*;
use crate::net::error::NetError;

const TEST_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        required: true,
        admin_only: false,
        placeholder: "",
        initial: "",
    },
    FieldDescriptor {
        name: "status",
        label: "Status",
        kind: FieldKind::Select {
            options: &[
                SelectOption {
                    value: "todo",
                    label: "To Do",
                },
                SelectOption {
                    value: "done",
                    label: "Done",
                },
            ],
        },
        required: true,
        admin_only: false,
        placeholder: "",
        initial: "todo",
    },
    FieldDescriptor {
        name: "assigned_to_id",
        label: "Assign To",
        kind: FieldKind::RelatedRef {
            endpoint: "/auth/users/",
            label_key: "username",
        },
        required: false,
        admin_only: true,
        placeholder: "Select User (Optional)",
        initial: "",
    },
];

// =============================================================
// rows_from_response
// =============================================================

#[test]
fn bare_array_responses_are_rows() {
    let rows = rows_from_response(&serde_json::json!([{"id": 1}, {"id": 2}]));
    assert_eq!(rows.len(), 2);
}

#[test]
fn paginated_responses_unwrap_results() {
    let rows = rows_from_response(&serde_json::json!({"count": 1, "results": [{"id": 1}]}));
    assert_eq!(rows.len(), 1);
}

#[test]
fn non_list_responses_yield_no_rows() {
    assert!(rows_from_response(&serde_json::json!({"detail": "x"})).is_empty());
    assert!(rows_from_response(&serde_json::Value::Null).is_empty());
}

// =============================================================
// display_cell
// =============================================================

#[test]
fn string_and_number_cells_render_plainly() {
    let row = serde_json::json!({"name": "North Field", "id": 4});
    assert_eq!(display_cell(&row, "name"), "North Field");
    assert_eq!(display_cell(&row, "id"), "4");
}

#[test]
fn dotted_keys_resolve_nested_objects() {
    let row = serde_json::json!({"field": {"name": "North Field"}});
    assert_eq!(display_cell(&row, "field.name"), "North Field");
}

#[test]
fn missing_or_null_cells_render_na() {
    let row = serde_json::json!({"field": serde_json::Value::Null});
    assert_eq!(display_cell(&row, "field.name"), "N/A");
    assert_eq!(display_cell(&row, "nope"), "N/A");
    assert_eq!(display_cell(&row, "field"), "N/A");
}

// =============================================================
// Forms
// =============================================================

#[test]
fn initial_form_uses_descriptor_initial_values() {
    let form = initial_form(TEST_FIELDS);
    assert_eq!(form["name"], "");
    assert_eq!(form["status"], "todo");
}

#[test]
fn form_from_row_stringifies_values() {
    let row = serde_json::json!({"id": 3, "name": "Water", "status": "done"});
    let form = form_from_row(TEST_FIELDS, &row);
    assert_eq!(form["name"], "Water");
    assert_eq!(form["status"], "done");
}

#[test]
fn form_from_row_reads_nested_related_ids() {
    // Serializer nests the related object on read; the form key is the
    // writable `_id` variant.
    let row = serde_json::json!({"id": 3, "name": "Water", "status": "todo",
        "assigned_to": {"id": 9, "username": "joe"}});
    let form = form_from_row(TEST_FIELDS, &row);
    assert_eq!(form["assigned_to_id"], "9");
}

#[test]
fn missing_required_reports_blank_fields_only() {
    let mut form = initial_form(TEST_FIELDS);
    assert_eq!(missing_required_labels(TEST_FIELDS, &form), vec!["Name"]);

    form.insert("name".to_owned(), serde_json::Value::String("  ".to_owned()));
    assert_eq!(missing_required_labels(TEST_FIELDS, &form), vec!["Name"]);

    form.insert("name".to_owned(), serde_json::Value::String("North".to_owned()));
    assert!(missing_required_labels(TEST_FIELDS, &form).is_empty());
}

#[test]
fn admin_only_fields_are_hidden_from_workers() {
    let worker_fields: Vec<&str> = visible_fields(TEST_FIELDS, Role::Worker)
        .iter()
        .map(|field| field.name)
        .collect();
    assert_eq!(worker_fields, vec!["name", "status"]);

    assert_eq!(visible_fields(TEST_FIELDS, Role::Admin).len(), TEST_FIELDS.len());
}

// =============================================================
// surface_error
// =============================================================

#[test]
fn stale_and_refresh_failures_are_not_surfaced() {
    assert_eq!(surface_error(&ApiError::Auth(AuthError::SessionSuperseded)), None);
    assert_eq!(surface_error(&ApiError::Auth(AuthError::RefreshFailed)), None);
}

#[test]
fn other_failures_surface_a_message() {
    let status = ApiError::Status {
        status: 500,
        body: serde_json::json!({"detail": "server exploded"}),
    };
    assert_eq!(surface_error(&status).as_deref(), Some("server exploded"));

    let net = ApiError::Net(NetError::Timeout);
    assert_eq!(surface_error(&net).as_deref(), Some("request timed out"));
}

#[test]
fn singular_strips_a_trailing_s() {
    assert_eq!(singular("Fields"), "Field");
    assert_eq!(singular("Inventory"), "Inventory");
}
