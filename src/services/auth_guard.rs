// ============================================================================
// AUTH GUARD - Uniform 401/403 policy around every protected call
// ============================================================================
// The one place allowed to evict the session. Every protected operation goes
// through `run`, so no call site can forget the "clear token and redirect"
// reaction to an authorization failure.
// ============================================================================

use std::future::Future;

use crate::services::error::{ApiError, GuardError};
use crate::services::session_store::SessionStore;

#[derive(Clone)]
pub struct AuthGuard<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> AuthGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Entry check: a protected action may only start with a token present.
    /// An absent token is the redirect signal, no network call happens.
    pub fn token(&self) -> Result<String, GuardError> {
        self.store.get().ok_or(GuardError::RedirectToLogin)
    }

    /// Classify the outcome of a protected call. 401/403 evicts the session
    /// and becomes the redirect signal; every other failure is recoverable
    /// and leaves the token in place.
    pub fn check<T>(&self, result: Result<T, ApiError>) -> Result<T, GuardError> {
        match result {
            Ok(value) => Ok(value),
            Err(err) if err.is_auth_expired() => {
                log::warn!("🔒 [GUARD] {} - clearing session, redirecting to login", err);
                self.store.clear();
                Err(GuardError::RedirectToLogin)
            }
            Err(err) => Err(GuardError::Api(err)),
        }
    }

    /// Run one protected operation end to end: entry check, call, classify.
    pub async fn run<T, F, Fut>(&self, op: F) -> Result<T, GuardError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let token = self.token()?;
        self.check(op(token).await)
    }

    /// Store the token handed out by a successful login
    pub fn start_session(&self, token: &str) {
        self.store.set(token);
    }

    /// Drop the session on explicit logout
    pub fn end_session(&self) {
        log::info!("👋 [GUARD] Logout, clearing session");
        self.store.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.get().is_some()
    }
}
