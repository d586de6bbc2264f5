//! Single-flight access-token refresh.
//!
//! DESIGN
//! ======
//! However many concurrent calls discover a rejected access token, at
//! most one refresh network call is ever in flight. The in-flight attempt
//! is a `Shared` future held in an `Rc<RefCell<Option<..>>>` slot: the
//! first caller creates and stores it, later callers clone it, and the
//! attempt body empties the slot as its final act, so the waiters of one
//! attempt are exactly the callers that arrived between its start and its
//! resolution. The body runs once no matter how many waiters attach,
//! which is what makes the terminal-failure side effects (store cleared,
//! session-ended notified) exactly-once.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

use crate::auth::error::AuthError;
use crate::auth::events::SessionEvents;
use crate::auth::session::AuthGeneration;
use crate::auth::token_store::{TokenPair, TokenStore};
use crate::net::http::{ApiRequest, HttpTransport, Method};
use crate::net::types::{RefreshRequest, RefreshResponse};

const REFRESH_PATH: &str = "/auth/refresh/";

/// The in-flight refresh attempt every concurrent caller awaits.
pub type SharedAttempt = Shared<LocalBoxFuture<'static, Result<String, AuthError>>>;

/// Coalesces concurrent refresh attempts into one network call.
#[derive(Clone)]
pub struct RefreshCoordinator<T> {
    transport: T,
    store: Rc<dyn TokenStore>,
    events: SessionEvents,
    generation: AuthGeneration,
    in_flight: Rc<RefCell<Option<SharedAttempt>>>,
}

impl<T: HttpTransport + Clone + 'static> RefreshCoordinator<T> {
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
            in_flight: Rc::new(RefCell::new(None)),
        }
    }

    /// Obtain a fresh access token, joining the in-flight attempt if one
    /// exists.
    ///
    /// Every returned future settles: with the new access token when the
    /// attempt succeeds, or `RefreshFailed` for every waiter of a failed
    /// attempt. A failed attempt clears the store and notifies
    /// session-ended exactly once.
    pub fn request_refresh(&self) -> SharedAttempt {
        let mut slot = self.in_flight.borrow_mut();
        if let Some(attempt) = slot.as_ref() {
            return attempt.clone();
        }
        let attempt = run_attempt(
            self.transport.clone(),
            Rc::clone(&self.store),
            self.events.clone(),
            self.generation.clone(),
            Rc::clone(&self.in_flight),
        )
        .boxed_local()
        .shared();
        *slot = Some(attempt.clone());
        attempt
    }
}

async fn run_attempt<T: HttpTransport>(
    transport: T,
    store: Rc<dyn TokenStore>,
    events: SessionEvents,
    generation: AuthGeneration,
    in_flight: Rc<RefCell<Option<SharedAttempt>>>,
) -> Result<String, AuthError> {
    let result = exchange_refresh_token(&transport, &store).await;
    if result.is_err() {
        // Terminal for every waiter of this attempt.
        store.clear();
        generation.bump();
        events.notify_session_ended();
    }
    // Empty the slot before resolving so the next refresh request starts a
    // fresh attempt.
    in_flight.borrow_mut().take();
    result
}

async fn exchange_refresh_token<T: HttpTransport>(
    transport: &T,
    store: &Rc<dyn TokenStore>,
) -> Result<String, AuthError> {
    let Some(pair) = store.load() else {
        leptos::logging::warn!("token refresh requested with no stored refresh token");
        return Err(AuthError::RefreshFailed);
    };

    let body = serde_json::to_value(RefreshRequest {
        refresh: pair.refresh.clone(),
    })
    .map_err(|_| AuthError::RefreshFailed)?;
    let response = transport
        .send(ApiRequest {
            method: Method::Post,
            path: REFRESH_PATH.to_owned(),
            body: Some(body),
            bearer: None,
        })
        .await
        .map_err(|err| {
            leptos::logging::warn!("token refresh transport failure: {err}");
            AuthError::RefreshFailed
        })?;

    if !response.is_success() {
        leptos::logging::warn!("token refresh rejected with status {}", response.status);
        return Err(AuthError::RefreshFailed);
    }

    let refreshed: RefreshResponse = response.json().map_err(|_| AuthError::RefreshFailed)?;
    store.save(&TokenPair {
        access: refreshed.access.clone(),
        // Refresh token is unchanged unless the endpoint rotates it.
        refresh: refreshed.refresh.unwrap_or(pair.refresh),
    });
    Ok(refreshed.access)
}
