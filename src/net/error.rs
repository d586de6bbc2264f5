//! Transport and API error taxonomy.

use thiserror::Error;

use crate::auth::AuthError;

/// Generic transport failure, unrelated to authorization.
///
/// The core never retries these; they are surfaced to the calling screen
/// for its own retry/display logic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NetError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The configured request timeout elapsed.
    #[error("request timed out")]
    Timeout,
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Outcome of an authorized API call.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// Session-layer failure (expired session, stale response).
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// Transport-layer failure.
    #[error(transparent)]
    Net(#[from] NetError),
    /// The backend answered with a non-success status.
    #[error("request rejected with status {status}")]
    Status {
        status: u16,
        body: serde_json::Value,
    },
}

impl ApiError {
    /// Backend-provided human-readable detail, when the rejection body
    /// carries one (DRF puts it under `detail`).
    pub fn detail(&self) -> Option<String> {
        match self {
            ApiError::Status { body, .. } => body
                .get("detail")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned),
            _ => None,
        }
    }

    /// Message suitable for an error banner.
    pub fn user_message(&self) -> String {
        self.detail().unwrap_or_else(|| self.to_string())
    }
}
