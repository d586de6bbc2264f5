//! Browser HTTP transport backed by `gloo-net`.
//!
//! TRADE-OFFS
//! ==========
//! The timeout is enforced by racing the request against a timer rather
//! than cancelling the underlying fetch; the browser abandons the socket
//! when the future drops.

use futures::future::Either;

use crate::net::error::NetError;
use crate::net::http::{ApiRequest, ApiResponse, HttpTransport, Method};

/// `gloo-net` transport, relative to the configured API base.
#[derive(Clone, Debug)]
pub struct GlooTransport {
    base: String,
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(base: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base: base.into(),
            timeout_ms,
        }
    }
}

impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, NetError> {
        let url = format!("{}{}", self.base, request.path);
        let mut builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&url),
            Method::Post => gloo_net::http::Request::post(&url),
            Method::Put => gloo_net::http::Request::put(&url),
            Method::Delete => gloo_net::http::Request::delete(&url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let prepared = match request.body {
            Some(body) => builder
                .json(&body)
                .map_err(|err| NetError::Transport(err.to_string()))?,
            None => builder
                .build()
                .map_err(|err| NetError::Transport(err.to_string()))?,
        };

        let send = Box::pin(prepared.send());
        let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));
        let response = match futures::future::select(send, timeout).await {
            Either::Left((outcome, _)) => outcome.map_err(|err| NetError::Transport(err.to_string()))?,
            Either::Right(_) => return Err(NetError::Timeout),
        };

        let status = response.status();
        // Empty or non-JSON bodies (204, HTML error pages) become Null.
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);
        Ok(ApiResponse { status, body })
    }
}
