use super::*;
use crate::auth::testutil::{token_for, token_with_payload};

const NOW: i64 = 1_700_000_000;

// =============================================================
// Valid tokens
// =============================================================

#[test]
fn decodes_claims_from_a_valid_token() {
    let token = token_for(7, "amina", "admin", NOW + 3600);
    let claims = decode_claims(&token, NOW).expect("valid token");
    assert_eq!(claims.user_id, 7);
    assert_eq!(claims.username, "amina");
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.exp, NOW + 3600);
}

#[test]
fn worker_role_decodes_as_worker() {
    let token = token_for(3, "joe", "worker", NOW + 60);
    let claims = decode_claims(&token, NOW).expect("valid token");
    assert_eq!(claims.role, Role::Worker);
}

#[test]
fn missing_role_claim_defaults_to_worker() {
    let token = token_with_payload(&serde_json::json!({
        "user_id": 4,
        "username": "nia",
        "exp": NOW + 60,
    }));
    let claims = decode_claims(&token, NOW).expect("valid token");
    assert_eq!(claims.role, Role::Worker);
}

#[test]
fn unknown_role_string_behaves_as_worker() {
    let token = token_for(5, "pat", "supervisor", NOW + 60);
    let claims = decode_claims(&token, NOW).expect("valid token");
    assert_eq!(claims.role, Role::Worker);
}

#[test]
fn missing_username_defaults_to_empty() {
    let token = token_with_payload(&serde_json::json!({
        "user_id": 4,
        "exp": NOW + 60,
    }));
    let claims = decode_claims(&token, NOW).expect("valid token");
    assert_eq!(claims.username, "");
}

#[test]
fn payload_without_padding_still_decodes() {
    // Payload length not divisible by four exercises padding restoration.
    let token = token_with_payload(&serde_json::json!({
        "user_id": 1,
        "username": "x",
        "exp": NOW + 1,
    }));
    let payload = token.split('.').nth(1).unwrap();
    assert_ne!(payload.len() % 4, 0, "test payload should need padding");
    assert!(decode_claims(&token, NOW).is_ok());
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn expired_token_is_rejected_and_never_yields_claims() {
    let token = token_for(7, "amina", "admin", NOW - 1);
    assert_eq!(decode_claims(&token, NOW), Err(AuthError::ExpiredToken));
}

#[test]
fn token_expiring_exactly_now_is_rejected() {
    let token = token_for(7, "amina", "admin", NOW);
    assert_eq!(decode_claims(&token, NOW), Err(AuthError::ExpiredToken));
}

#[test]
fn token_expiring_one_second_from_now_is_accepted() {
    let token = token_for(7, "amina", "admin", NOW + 1);
    assert!(decode_claims(&token, NOW).is_ok());
}

// =============================================================
// Malformed tokens
// =============================================================

#[test]
fn two_segment_token_is_invalid() {
    assert_eq!(decode_claims("abc.def", NOW), Err(AuthError::InvalidToken));
}

#[test]
fn four_segment_token_is_invalid() {
    assert_eq!(decode_claims("a.b.c.d", NOW), Err(AuthError::InvalidToken));
}

#[test]
fn empty_token_is_invalid() {
    assert_eq!(decode_claims("", NOW), Err(AuthError::InvalidToken));
}

#[test]
fn non_base64_payload_is_invalid() {
    assert_eq!(decode_claims("aGVhZA.%%%.c2ln", NOW), Err(AuthError::InvalidToken));
}

#[test]
fn non_json_payload_is_invalid() {
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let payload = URL_SAFE_NO_PAD.encode(b"not json at all");
    let token = format!("head.{payload}.sig");
    assert_eq!(decode_claims(&token, NOW), Err(AuthError::InvalidToken));
}

#[test]
fn payload_missing_exp_is_invalid() {
    let token = token_with_payload(&serde_json::json!({
        "user_id": 1,
        "username": "x",
    }));
    assert_eq!(decode_claims(&token, NOW), Err(AuthError::InvalidToken));
}

#[test]
fn payload_missing_user_id_is_invalid() {
    let token = token_with_payload(&serde_json::json!({
        "username": "x",
        "exp": NOW + 60,
    }));
    assert_eq!(decode_claims(&token, NOW), Err(AuthError::InvalidToken));
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_as_str_round_trips_wire_names() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Worker.as_str(), "worker");
}

#[test]
fn role_default_is_worker() {
    assert_eq!(Role::default(), Role::Worker);
}
