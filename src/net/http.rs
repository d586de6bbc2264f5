//! Transport seam and the authorized API client.
//!
//! ERROR HANDLING
//! ==============
//! A 401 triggers at most one refresh-and-resubmit per call; the retry
//! flag lives on the call invocation itself, so concurrent distinct calls
//! are each retried independently exactly once. Every other failure is
//! propagated untouched.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::refresh::RefreshCoordinator;
use crate::auth::session::AuthGeneration;
use crate::auth::token_store::TokenStore;
use crate::net::error::{ApiError, NetError};

/// HTTP method subset used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One outbound call, ready for a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, e.g. `/crops/fields/`.
    pub path: String,
    pub body: Option<serde_json::Value>,
    /// Bearer token for the `Authorization` header; `None` sends the call
    /// unauthenticated.
    pub bearer: Option<String>,
}

/// Raw response surfaced by a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON body, `Null` when the response has none.
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Deserialize the body.
    ///
    /// # Errors
    ///
    /// `NetError::Decode` when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, NetError> {
        serde_json::from_value(self.body.clone()).map_err(|err| NetError::Decode(err.to_string()))
    }
}

/// Seam between the client and the actual HTTP machinery.
///
/// The browser implementation is [`crate::net::gloo::GlooTransport`];
/// tests drive the client with scripted fakes.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, NetError>;
}

/// Authorized API client wrapping every outbound resource call.
///
/// Flow per call: attach the current access token, send, and on the first
/// 401 obtain a token through the refresh coordinator and resubmit once.
/// A second 401, or a refresh failure, propagates to the caller.
#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
    store: Rc<dyn TokenStore>,
    refresh: RefreshCoordinator<T>,
    generation: AuthGeneration,
}

impl<T: HttpTransport + Clone + 'static> ApiClient<T> {
    pub fn new(
        transport: T,
        store: Rc<dyn TokenStore>,
        refresh: RefreshCoordinator<T>,
        generation: AuthGeneration,
    ) -> Self {
        Self {
            transport,
            store,
            refresh,
            generation,
        }
    }

    /// Send one authorized call.
    ///
    /// # Errors
    ///
    /// `ApiError::Status` for non-success responses (including a 401 that
    /// survived the single retry), `ApiError::Auth` for refresh failures
    /// and stale-session results, `ApiError::Net` for transport failures.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        let started_generation = self.generation.current();
        let mut bearer = self.store.load().map(|pair| pair.access);
        // Retry flag for THIS call only; never shared across calls.
        let mut retried = false;

        loop {
            let outcome = self
                .transport
                .send(ApiRequest {
                    method,
                    path: path.to_owned(),
                    body: body.clone(),
                    bearer: bearer.clone(),
                })
                .await;
            self.guard_generation(started_generation)?;
            let response = outcome.map_err(ApiError::Net)?;

            if response.is_unauthorized() && !retried {
                retried = true;
                let access = self.refresh.request_refresh().await.map_err(ApiError::Auth)?;
                self.guard_generation(started_generation)?;
                bearer = Some(access);
                continue;
            }

            if response.is_success() {
                return Ok(response);
            }
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }
    }

    /// GET and deserialize the response body.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.request(Method::Get, path, None).await?;
        response.json().map_err(ApiError::Net)
    }

    /// POST a serializable body.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        self.request(Method::Post, path, Some(to_body(body)?)).await
    }

    /// PUT a serializable body.
    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        self.request(Method::Put, path, Some(to_body(body)?)).await
    }

    /// DELETE the resource at `path`.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.request(Method::Delete, path, None).await
    }

    /// Discard results that arrived for a session that has since ended.
    fn guard_generation(&self, started_generation: u64) -> Result<(), ApiError> {
        if self.generation.current() == started_generation {
            Ok(())
        } else {
            Err(ApiError::Auth(crate::auth::AuthError::SessionSuperseded))
        }
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|err| ApiError::Net(NetError::Decode(err.to_string())))
}
