//! Shared helpers for session-core tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::error::NetError;
use crate::net::http::{ApiRequest, ApiResponse, HttpTransport};

/// Build a compact three-segment token whose payload is `claims`.
///
/// The signature segment is junk; the client-side decoder never checks it.
pub fn token_with_payload(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.sig")
}

/// A token for `user_id`/`username`/`role` expiring at `exp`.
pub fn token_for(user_id: i64, username: &str, role: &str, exp: i64) -> String {
    token_with_payload(&serde_json::json!({
        "user_id": user_id,
        "username": username,
        "role": role,
        "exp": exp,
    }))
}

/// A 200 response with `body`.
pub fn ok_json(body: serde_json::Value) -> Result<ApiResponse, NetError> {
    Ok(ApiResponse { status: 200, body })
}

/// A non-success response with `status` and `body`.
pub fn status_json(status: u16, body: serde_json::Value) -> Result<ApiResponse, NetError> {
    Ok(ApiResponse { status, body })
}

#[derive(Default)]
struct FakeInner {
    replies: HashMap<String, VecDeque<Result<ApiResponse, NetError>>>,
    requests: Vec<ApiRequest>,
    yield_before_reply: bool,
    on_send: Option<Box<dyn Fn()>>,
}

/// Scripted transport: per-path reply queues plus a request log.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Rc<RefCell<FakeInner>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next reply for `path`.
    pub fn enqueue(&self, path: &str, reply: Result<ApiResponse, NetError>) {
        self.inner
            .borrow_mut()
            .replies
            .entry(path.to_owned())
            .or_default()
            .push_back(reply);
    }

    /// Suspend once before every reply so concurrent callers interleave.
    pub fn yield_before_reply(&self) {
        self.inner.borrow_mut().yield_before_reply = true;
    }

    /// Hook invoked on every send, before the reply is produced.
    pub fn on_send(&self, hook: impl Fn() + 'static) {
        self.inner.borrow_mut().on_send = Some(Box::new(hook));
    }

    /// Every request seen so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.borrow().requests.clone()
    }

    /// Requests sent to `path`.
    pub fn calls_to(&self, path: &str) -> usize {
        self.inner
            .borrow()
            .requests
            .iter()
            .filter(|request| request.path == path)
            .count()
    }
}

impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, NetError> {
        let path = request.path.clone();
        let (reply, should_yield) = {
            let mut inner = self.inner.borrow_mut();
            inner.requests.push(request);
            let reply = inner.replies.get_mut(&path).and_then(VecDeque::pop_front);
            (reply, inner.yield_before_reply)
        };
        let hook = self.inner.borrow_mut().on_send.take();
        if let Some(hook) = hook {
            hook();
            self.inner.borrow_mut().on_send = Some(hook);
        }
        if should_yield {
            yield_now().await;
        }
        reply.unwrap_or_else(|| Err(NetError::Transport(format!("no scripted reply for {path}"))))
    }
}

/// Suspend once and resume on the next executor pass.
pub fn yield_now() -> YieldNow {
    YieldNow { yielded: false }
}

pub struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
