use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
}

/// Error body the backend attaches to rejected requests: `{ "error": "..." }`.
/// Every field is optional so that an empty or foreign body still decodes.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ServerErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
