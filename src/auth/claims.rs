//! Access-token claim decoding.
//!
//! TRUST BOUNDARY
//! ==============
//! The signature segment is never verified here. Claims are trusted as
//! issued because the backend re-validates the signature on every API
//! call; a tampered token can at most mis-render the UI until the next
//! request is rejected, which runs the normal logout path.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Deserializer};

use crate::auth::error::AuthError;

/// User role carried in the `role` claim.
///
/// The backend only distinguishes administrators from everyone else, so
/// any unrecognized role string behaves as `Worker`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Admin,
    #[default]
    Worker,
}

impl Role {
    /// Wire/display name for the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Worker => "worker",
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == "admin" { Role::Admin } else { Role::Worker })
    }
}

/// Claims extracted from the access token payload.
///
/// Derived transiently whenever the access token changes; never stored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionClaims {
    /// Backend user id.
    pub user_id: i64,
    /// Login name, for display.
    #[serde(default)]
    pub username: String,
    /// Role claim; absent means `Worker`.
    #[serde(default)]
    pub role: Role,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

/// Decode an access token into session claims.
///
/// The token must be a three-segment `header.payload.signature` compact
/// form; the payload is URL-safe base64 with padding restored before
/// decoding, and must parse as a JSON claim set.
///
/// # Errors
///
/// `InvalidToken` when the structure or payload is malformed;
/// `ExpiredToken` when `exp <= now_epoch_seconds`. Expired tokens never
/// yield claims.
pub fn decode_claims(token: &str, now_epoch_seconds: i64) -> Result<SessionClaims, AuthError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return Err(AuthError::InvalidToken),
    };

    let bytes = URL_SAFE
        .decode(restore_padding(payload))
        .map_err(|_| AuthError::InvalidToken)?;
    let claims: SessionClaims = serde_json::from_slice(&bytes).map_err(|_| AuthError::InvalidToken)?;

    if claims.exp <= now_epoch_seconds {
        return Err(AuthError::ExpiredToken);
    }
    Ok(claims)
}

/// JWT payloads are emitted without base64 padding; restore it so the
/// padded alphabet accepts them.
fn restore_padding(segment: &str) -> String {
    let mut padded = segment.to_owned();
    for _ in 0..(4 - segment.len() % 4) % 4 {
        padded.push('=');
    }
    padded
}

/// Current time as seconds since the Unix epoch.
pub fn now_epoch_seconds() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let seconds = (js_sys::Date::now() / 1000.0) as i64;
        seconds
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        #[allow(clippy::cast_possible_wrap)]
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as i64)
            .unwrap_or(0);
        seconds
    }
}
