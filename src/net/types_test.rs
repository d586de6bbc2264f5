use super::*;

#[test]
fn login_request_serializes_credentials() {
    let body = serde_json::to_value(LoginRequest {
        username: "amina".to_owned(),
        password: "hunter2".to_owned(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({"username": "amina", "password": "hunter2"}));
}

#[test]
fn login_response_deserializes_both_tokens() {
    let parsed: LoginResponse =
        serde_json::from_value(serde_json::json!({"access": "a", "refresh": "r"})).unwrap();
    assert_eq!(parsed.access, "a");
    assert_eq!(parsed.refresh, "r");
}

#[test]
fn refresh_response_without_rotation_has_no_refresh() {
    let parsed: RefreshResponse = serde_json::from_value(serde_json::json!({"access": "a2"})).unwrap();
    assert_eq!(parsed.access, "a2");
    assert_eq!(parsed.refresh, None);
}

#[test]
fn refresh_response_with_rotation_carries_the_new_refresh() {
    let parsed: RefreshResponse =
        serde_json::from_value(serde_json::json!({"access": "a2", "refresh": "r2"})).unwrap();
    assert_eq!(parsed.refresh.as_deref(), Some("r2"));
}

#[test]
fn register_request_omits_absent_optional_fields() {
    let body = serde_json::to_value(RegisterRequest {
        username: "joe".to_owned(),
        email: "joe@farm.example".to_owned(),
        password: "pw".to_owned(),
        ..RegisterRequest::default()
    })
    .unwrap();
    assert_eq!(
        body,
        serde_json::json!({"username": "joe", "email": "joe@farm.example", "password": "pw"})
    );
}

#[test]
fn api_user_tolerates_missing_optional_columns() {
    let parsed: ApiUser = serde_json::from_value(serde_json::json!({"id": 3, "username": "joe"})).unwrap();
    assert_eq!(parsed.id, 3);
    assert_eq!(parsed.role, "");
    assert_eq!(parsed.first_name, "");
}
