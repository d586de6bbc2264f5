//! Durable storage for the access/refresh token pair.
//!
//! DESIGN
//! ======
//! The pair is the only mutable shared resource in the client; it is
//! mutated exclusively through `save`/`clear`, called only by the login,
//! refresh-success, and logout paths. The runtime is single-threaded and
//! both writes happen without an intervening await point, so a reader can
//! never observe a mismatched pair.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "hydrate")]
const ACCESS_TOKEN_KEY: &str = "agrisync_access_token";
#[cfg(feature = "hydrate")]
const REFRESH_TOKEN_KEY: &str = "agrisync_refresh_token";

/// The persisted access/refresh token pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived bearer token attached to every authorized request.
    pub access: String,
    /// Long-lived token exchanged at the refresh endpoint.
    pub refresh: String,
}

/// Storage seam for the token pair.
///
/// `load` returns both values or absence; a half-present pair is treated
/// as absence. No network or decoding logic belongs here.
pub trait TokenStore {
    /// Replace both values. Readers never see a mismatched pair.
    fn save(&self, pair: &TokenPair);
    /// The currently persisted pair, if both halves are present.
    fn load(&self) -> Option<TokenPair>;
    /// Remove both values.
    fn clear(&self);
}

/// In-memory store used by tests and as the non-browser fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    inner: Rc<RefCell<Option<TokenPair>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, pair: &TokenPair) {
        *self.inner.borrow_mut() = Some(pair.clone());
    }

    fn load(&self) -> Option<TokenPair> {
        self.inner.borrow().clone()
    }

    fn clear(&self) {
        self.inner.borrow_mut().take();
    }
}

/// Browser store backed by `localStorage`; survives page reloads.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
impl LocalStorageTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for LocalStorageTokenStore {
    fn save(&self, pair: &TokenPair) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(ACCESS_TOKEN_KEY, &pair.access);
        let _ = storage.set_item(REFRESH_TOKEN_KEY, &pair.refresh);
    }

    fn load(&self) -> Option<TokenPair> {
        let storage = Self::storage()?;
        let access = storage.get_item(ACCESS_TOKEN_KEY).ok().flatten();
        let refresh = storage.get_item(REFRESH_TOKEN_KEY).ok().flatten();
        match (access, refresh) {
            (Some(access), Some(refresh)) => Some(TokenPair { access, refresh }),
            (None, None) => None,
            // Half a pair is unusable; clean it up and report absence.
            _ => {
                self.clear();
                None
            }
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

/// The token store for the current build target.
pub fn default_token_store() -> Rc<dyn TokenStore> {
    #[cfg(feature = "hydrate")]
    {
        Rc::new(LocalStorageTokenStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Rc::new(MemoryTokenStore::new())
    }
}
