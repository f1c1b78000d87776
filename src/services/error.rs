// ============================================================================
// ERROR TAXONOMY - How every backend response failure is classified
// ============================================================================

use thiserror::Error;

/// Failure of a single gateway call. `AuthExpired` is the only variant that
/// touches the session; the auth guard is the sole place that handles it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("invalid credentials")]
    InvalidCredentials,

    /// 401/403 on a protected call - the bearer token is no longer accepted
    #[error("authorization rejected (HTTP {status})")]
    AuthExpired { status: u16 },

    #[error("resource not found")]
    NotFound,

    /// Any other non-2xx; carries the backend's `error` message when present
    #[error("server rejected the request")]
    Server { message: Option<String> },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response payload: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired { .. })
    }

    /// Message supplied by the backend, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message } => message.as_deref(),
            _ => None,
        }
    }
}

/// Outcome of a guarded call as seen by the viewmodels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GuardError {
    /// Session was absent or evicted - navigate to login, nothing to recover
    #[error("session invalid, redirect to login")]
    RedirectToLogin,

    /// Recoverable failure, session retained
    #[error(transparent)]
    Api(#[from] ApiError),
}
