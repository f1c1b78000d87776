pub mod api_client;
pub mod auth_guard;
pub mod error;
pub mod session_store;

pub use api_client::{ApiClient, ProductApi};
pub use auth_guard::AuthGuard;
pub use error::{ApiError, GuardError};
pub use session_store::{BrowserSessionStore, SessionStore, TOKEN_STORAGE_KEY};
