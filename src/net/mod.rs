//! Networking: transport seam, wire DTOs, and the authorized API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the `HttpTransport` seam and the retry-once authorizer,
//! `types` defines the wire schema, and `gloo` is the browser transport.

pub mod error;
#[cfg(feature = "hydrate")]
pub mod gloo;
pub mod http;
pub mod types;

pub use error::{ApiError, NetError};
pub use http::{ApiClient, ApiRequest, ApiResponse, HttpTransport, Method};
