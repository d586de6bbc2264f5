//! Session lifecycle: login, logout, bootstrap, registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token pair is mutated only here and in the refresh path. Login and
//! register talk to the transport directly — they run unauthenticated and
//! must never enter the 401-retry flow of the authorized client.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::auth::claims::{Role, SessionClaims, decode_claims, now_epoch_seconds};
use crate::auth::events::SessionEvents;
use crate::auth::token_store::{TokenPair, TokenStore};
use crate::net::error::ApiError;
use crate::net::http::{ApiRequest, HttpTransport, Method};
use crate::net::types::{LoginRequest, LoginResponse, RegisterRequest};

const LOGIN_PATH: &str = "/auth/login/";
const REGISTER_PATH: &str = "/auth/register/";

/// Monotonic counter identifying the current auth epoch.
///
/// Bumped on login, logout, and terminal refresh failure. A request
/// snapshots it at start; a mismatch at completion marks the result as
/// stale (issued under a session that has since ended).
#[derive(Clone, Debug, Default)]
pub struct AuthGeneration {
    inner: Rc<Cell<u64>>,
}

impl AuthGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u64 {
        self.inner.get()
    }

    pub fn bump(&self) {
        self.inner.set(self.inner.get() + 1);
    }
}

/// The signed-in user as derived from token claims.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl From<SessionClaims> for SessionUser {
    fn from(claims: SessionClaims) -> Self {
        Self {
            id: claims.user_id,
            username: claims.username,
            role: claims.role,
        }
    }
}

/// Owner of the session lifecycle.
#[derive(Clone)]
pub struct Session<T> {
    transport: T,
    store: Rc<dyn TokenStore>,
    events: SessionEvents,
    generation: AuthGeneration,
}

impl<T: HttpTransport + Clone + 'static> Session<T> {
    pub fn new(
        transport: T,
        store: Rc<dyn TokenStore>,
        events: SessionEvents,
        generation: AuthGeneration,
    ) -> Self {
        Self {
            transport,
            store,
            events,
            generation,
        }
    }

    /// Exchange credentials for a token pair and decode the new session.
    ///
    /// # Errors
    ///
    /// `ApiError::Status` when the backend rejects the credentials;
    /// `ApiError::Auth` when the issued access token does not decode (the
    /// pair is cleared again in that case).
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionUser, ApiError> {
        let body = serde_json::to_value(LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        })
        .map_err(|err| ApiError::Net(crate::net::error::NetError::Decode(err.to_string())))?;

        let response = self
            .transport
            .send(ApiRequest {
                method: Method::Post,
                path: LOGIN_PATH.to_owned(),
                body: Some(body),
                bearer: None,
            })
            .await
            .map_err(ApiError::Net)?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let tokens: LoginResponse = response.json().map_err(ApiError::Net)?;
        self.store.save(&TokenPair {
            access: tokens.access.clone(),
            refresh: tokens.refresh,
        });
        self.generation.bump();

        match decode_claims(&tokens.access, now_epoch_seconds()) {
            Ok(claims) => Ok(claims.into()),
            Err(err) => {
                // The backend issued something we cannot read; do not keep it.
                self.store.clear();
                Err(ApiError::Auth(err))
            }
        }
    }

    /// Create an account. Does not authenticate.
    ///
    /// # Errors
    ///
    /// `ApiError::Status` carrying the backend's field errors on rejection.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(request)
            .map_err(|err| ApiError::Net(crate::net::error::NetError::Decode(err.to_string())))?;
        let response = self
            .transport
            .send(ApiRequest {
                method: Method::Post,
                path: REGISTER_PATH.to_owned(),
                body: Some(body),
                bearer: None,
            })
            .await
            .map_err(ApiError::Net)?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: response.status,
                body: response.body,
            })
        }
    }

    /// Decode the persisted session once at startup.
    ///
    /// An invalid or expired persisted token forces a silent logout: the
    /// store is cleared and `None` is returned, never an error.
    pub fn bootstrap(&self) -> Option<SessionUser> {
        let pair = self.store.load()?;
        match decode_claims(&pair.access, now_epoch_seconds()) {
            Ok(claims) => Some(claims.into()),
            Err(err) => {
                leptos::logging::warn!("persisted token unusable ({err}); signing out");
                self.store.clear();
                None
            }
        }
    }

    /// End the session: clear the pair, advance the generation, notify.
    pub fn logout(&self) {
        self.store.clear();
        self.generation.bump();
        self.events.notify_session_ended();
    }

    /// Read-only view of the currently persisted session, if any.
    pub fn current_user(&self) -> Option<SessionUser> {
        let pair = self.store.load()?;
        decode_claims(&pair.access, now_epoch_seconds())
            .ok()
            .map(SessionUser::from)
    }

    /// The session-ended channel, for subscribing collaborators.
    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    /// Handle to the auth generation counter.
    pub fn generation(&self) -> AuthGeneration {
        self.generation.clone()
    }
}
