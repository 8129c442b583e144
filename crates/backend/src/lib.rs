//! `boussala-backend`
//!
//! **Responsibility:** construct the data-backend handle.
//!
//! The rest of the application talks to a hosted Postgres-over-REST backend
//! through this handle. This crate only builds it (base URL + anonymous key
//! as default headers); queries live with their callers.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use boussala_config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The anonymous key contains bytes that cannot go into an HTTP header.
    #[error("invalid anonymous key: {0}")]
    InvalidKey(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Handle to the hosted data backend.
///
/// Cheap to clone; the inner `reqwest::Client` is already reference-counted.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http: reqwest::Client,
}

impl BackendClient {
    /// Build a handle from resolved configuration.
    ///
    /// Missing credentials are logged but tolerated; the handle still
    /// constructs so screens that never touch the backend keep working.
    pub fn connect(config: &AppConfig) -> Result<Self, BackendError> {
        if config.backend_url.is_empty() || config.backend_anon_key.is_empty() {
            tracing::warn!("backend credentials missing; check your .env or deployment settings");
        }

        let mut headers = HeaderMap::new();
        if !config.backend_anon_key.is_empty() {
            let key = HeaderValue::from_str(&config.backend_anon_key)
                .map_err(|e| BackendError::InvalidKey(e.to_string()))?;
            let bearer = HeaderValue::from_str(&format!("Bearer {}", config.backend_anon_key))
                .map_err(|e| BackendError::InvalidKey(e.to_string()))?;
            headers.insert("apikey", key);
            headers.insert(AUTHORIZATION, bearer);
        }

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// REST endpoint for a table, e.g. `rest_url("products")`.
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, key: &str) -> AppConfig {
        AppConfig {
            gemini_api_key: String::new(),
            backend_url: url.to_string(),
            backend_anon_key: key.to_string(),
        }
    }

    #[test]
    fn connect_builds_rest_urls() {
        let client = BackendClient::connect(&config("https://example.supabase.co/", "anon")).unwrap();
        assert_eq!(client.base_url(), "https://example.supabase.co");
        assert_eq!(
            client.rest_url("products"),
            "https://example.supabase.co/rest/v1/products"
        );
    }

    #[test]
    fn connect_tolerates_missing_credentials() {
        let client = BackendClient::connect(&config("", "")).unwrap();
        assert_eq!(client.base_url(), "");
    }

    #[test]
    fn connect_rejects_unprintable_key() {
        let err = BackendClient::connect(&config("https://example.supabase.co", "bad\nkey"));
        assert!(matches!(err, Err(BackendError::InvalidKey(_))));
    }
}
