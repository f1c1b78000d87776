use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: "http://localhost:3000".to_string(),
            api_url_production: "https://api.catalog.nexuslabs.one".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    /// (forwarded from `.env` by `build.rs`).
    pub fn from_env() -> Self {
        Self {
            api_url_development: option_env!("API_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:3000").to_string(),
            api_url_production: option_env!("API_URL_PRODUCTION")
                .unwrap_or("https://api.catalog.nexuslabs.one").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// Backend base URL for the current environment
    pub fn api_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_url_production,
            _ => &self.api_url_development,
        }
    }

    /// Whether console logging is enabled
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Global static configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
