//! Session and request-authorization core.
//!
//! SYSTEM CONTEXT
//! ==============
//! `token_store` persists the access/refresh pair, `claims` decodes the
//! access token into session claims, `events` broadcasts session-ended,
//! `refresh` coalesces concurrent refresh attempts into one network call,
//! `session` owns the login/logout/bootstrap lifecycle, and `guard` decides
//! route admission. Everything here is feature-independent and runs under
//! native `cargo test`; browser glue lives behind trait seams.

pub mod claims;
pub mod error;
pub mod events;
pub mod guard;
pub mod refresh;
pub mod session;
#[cfg(test)]
pub mod testutil;
pub mod token_store;

pub use claims::{Role, SessionClaims, decode_claims, now_epoch_seconds};
pub use error::AuthError;
pub use events::{SessionEndedSubscription, SessionEvents};
pub use guard::{AuthStatus, RouteDecision, RouteGuard};
pub use refresh::RefreshCoordinator;
pub use session::{AuthGeneration, Session, SessionUser};
pub use token_store::{MemoryTokenStore, TokenPair, TokenStore};
