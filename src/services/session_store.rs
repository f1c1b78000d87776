// ============================================================================
// SESSION STORE - Single bearer token persisted across page reloads
// ============================================================================
// The token is the only session state the client keeps. It is never
// inspected, only attached to requests; staleness is detected by a failed
// call, never proactively.
// ============================================================================

use crate::utils::{load_string, remove_from_storage, save_string};

/// localStorage key holding the bearer token. Absence of the key is the one
/// and only "unauthenticated" signal.
pub const TOKEN_STORAGE_KEY: &str = "catalog_token";

/// Injectable token storage so the auth guard can be exercised against an
/// in-memory fake in tests.
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Production store backed by `window.localStorage`
#[derive(Clone, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Option<String> {
        load_string(TOKEN_STORAGE_KEY)
    }

    fn set(&self, token: &str) {
        if let Err(e) = save_string(TOKEN_STORAGE_KEY, token) {
            log::error!("❌ [SESSION] Could not persist token: {}", e);
        }
    }

    fn clear(&self) {
        if let Err(e) = remove_from_storage(TOKEN_STORAGE_KEY) {
            log::error!("❌ [SESSION] Could not clear token: {}", e);
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::SessionStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory stand-in for `BrowserSessionStore`; clones share the slot so
    /// a test can observe what the guard did to the session.
    #[derive(Clone, Default)]
    pub struct MemorySessionStore {
        token: Rc<RefCell<Option<String>>>,
    }

    impl MemorySessionStore {
        pub fn empty() -> Self {
            Self::default()
        }

        pub fn with_token(token: &str) -> Self {
            let store = Self::default();
            store.set(token);
            store
        }
    }

    impl SessionStore for MemorySessionStore {
        fn get(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn set(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.token.borrow_mut() = None;
        }
    }
}
