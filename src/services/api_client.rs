// ============================================================================
// API CLIENT - HTTP communication only (stateless)
// ============================================================================
// No business logic and no session handling here: the token is passed in per
// call and credential lifecycle stays with the auth guard.
// ============================================================================

use gloo_net::http::{Request, Response};

use crate::config::CONFIG;
use crate::models::{LoginRequest, LoginResponse, Product, ProductPayload, ServerErrorBody};
use crate::services::error::ApiError;

/// Gateway to the product catalog backend. Implemented by `ApiClient` in
/// production and by stubs in viewmodel tests.
pub trait ProductApi {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;
    async fn list_products(&self, token: &str) -> Result<Vec<Product>, ApiError>;
    async fn get_product(&self, token: &str, id: &str) -> Result<Product, ApiError>;
    async fn create_product(&self, token: &str, payload: &ProductPayload) -> Result<Product, ApiError>;
    async fn update_product(&self, token: &str, id: &str, payload: &ProductPayload) -> Result<Product, ApiError>;
    async fn delete_product(&self, token: &str, id: &str) -> Result<(), ApiError>;
    async fn list_categories(&self, token: &str) -> Result<Vec<String>, ApiError>;
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_url().to_string(),
        }
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Map a non-2xx response onto the error taxonomy. Shared by every
    /// protected endpoint so 401/403 classification cannot drift per call.
    async fn classify_failure(response: Response) -> ApiError {
        let status = response.status();
        match status {
            401 | 403 => ApiError::AuthExpired { status },
            404 => ApiError::NotFound,
            _ => {
                let message = response
                    .json::<ServerErrorBody>()
                    .await
                    .ok()
                    .and_then(|body| body.error);
                ApiError::Server { message }
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/user/login", self.base_url);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 [API] Logging in as {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            log::warn!("⚠️ [API] Login rejected: HTTP {}", status);
            // Only a credential rejection means bad credentials; an outage
            // or proxy error must not masquerade as one
            if matches!(status, 400 | 401 | 403) {
                return Err(ApiError::InvalidCredentials);
            }
            return Err(Self::classify_failure(response).await);
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn list_products(&self, token: &str) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/products", self.base_url);

        let response = Request::get(&url)
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::classify_failure(response).await);
        }

        let products = response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        log::info!("📦 [API] Fetched {} products", products.len());
        Ok(products)
    }

    async fn get_product(&self, token: &str, id: &str) -> Result<Product, ApiError> {
        let url = format!("{}/products/{}", self.base_url, id);

        let response = Request::get(&url)
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::classify_failure(response).await);
        }

        response
            .json::<Product>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_product(&self, token: &str, payload: &ProductPayload) -> Result<Product, ApiError> {
        let url = format!("{}/products/new", self.base_url);

        log::info!("📝 [API] Creating product '{}'", payload.name);

        let response = Request::post(&url)
            .header("Authorization", &Self::bearer(token))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::classify_failure(response).await);
        }

        response
            .json::<Product>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_product(&self, token: &str, id: &str, payload: &ProductPayload) -> Result<Product, ApiError> {
        let url = format!("{}/products/edit/{}", self.base_url, id);

        log::info!("📝 [API] Updating product {}", id);

        let response = Request::patch(&url)
            .header("Authorization", &Self::bearer(token))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::classify_failure(response).await);
        }

        response
            .json::<Product>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn delete_product(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/products/{}", self.base_url, id);

        log::info!("🗑️ [API] Deleting product {}", id);

        let response = Request::delete(&url)
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::classify_failure(response).await);
        }

        Ok(())
    }

    async fn list_categories(&self, token: &str) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/products/categories", self.base_url);

        let response = Request::get(&url)
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::classify_failure(response).await);
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
