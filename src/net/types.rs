//! Wire DTOs for the AgriSync auth endpoints.
//!
//! DESIGN
//! ======
//! These mirror the backend's serializers so serde round-trips stay
//! lossless. Resource rows for the CRUD screens are deliberately kept as
//! `serde_json::Value` and rendered through column descriptors instead of
//! per-resource structs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials for `POST /auth/login/`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token pair issued on successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
}

/// Body for `POST /auth/refresh/`.
#[derive(Clone, Debug, Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Fresh access token from the refresh endpoint.
///
/// `refresh` is present only when the backend rotates refresh tokens.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Payload for `POST /auth/register/`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A user row as returned by `GET /auth/users/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}
