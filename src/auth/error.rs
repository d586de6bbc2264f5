//! Session-layer error taxonomy.

use thiserror::Error;

/// Failures raised by the session core.
///
/// `InvalidToken` and `ExpiredToken` during bootstrap are handled by a
/// silent logout and never surfaced to the user; `RefreshFailed` ends the
/// session and is shown as "session expired". `SessionSuperseded` marks a
/// response that arrived after the session it was issued under ended, so
/// callers discard it instead of acting on stale data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The access token is structurally malformed or its payload is not a
    /// parsable claim set.
    #[error("malformed access token")]
    InvalidToken,
    /// The access token's `exp` claim is at or before the current time.
    #[error("access token expired")]
    ExpiredToken,
    /// The refresh attempt failed terminally (missing refresh token,
    /// transport failure, or rejection by the backend).
    #[error("session expired, please sign in again")]
    RefreshFailed,
    /// The auth generation advanced while the request was in flight.
    #[error("response arrived for a superseded session")]
    SessionSuperseded,
}
