//! Two-source environment resolver and the application config struct.

use core::fmt;

/// Look up `key` in the `.env` file, then in the process environment.
///
/// Returns the first non-empty value, or `""` if the key is absent from
/// both. Failures in either source (missing file, invalid unicode) are
/// treated as absence.
pub fn resolve(key: &str) -> String {
    if let Ok(value) = dotenvy::var(key)
        && !value.is_empty()
    {
        return value;
    }

    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_default()
}

/// Resolve the first key in `keys` that yields a non-empty value.
///
/// Lets a value live under an app-prefixed name or a conventional one
/// (e.g. `BOUSSALA_API_KEY` vs `GEMINI_API_KEY`).
pub fn resolve_first(keys: &[&str]) -> String {
    for key in keys {
        let value = resolve(key);
        if !value.is_empty() {
            return value;
        }
    }
    String::new()
}

/// Resolved application configuration.
///
/// Constructed explicitly and passed into the insight engine / backend
/// client; there is no process-wide singleton.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Generative-service API key. Empty means AI features are disabled.
    pub gemini_api_key: String,
    /// Data-backend base URL.
    pub backend_url: String,
    /// Data-backend anonymous access key.
    pub backend_anon_key: String,
}

impl AppConfig {
    /// Resolve every configuration value from the environment.
    pub fn from_env() -> Self {
        let config = Self {
            gemini_api_key: resolve_first(&["BOUSSALA_API_KEY", "GEMINI_API_KEY"]),
            backend_url: resolve_first(&["BOUSSALA_SUPABASE_URL", "SUPABASE_URL"]),
            backend_anon_key: resolve_first(&["BOUSSALA_SUPABASE_ANON_KEY", "SUPABASE_ANON_KEY"]),
        };

        if !config.ai_configured() {
            tracing::warn!("no generative-service API key resolved; AI insights will use fallbacks");
        }

        config
    }

    /// Whether the generative service can be called at all.
    pub fn ai_configured(&self) -> bool {
        !self.gemini_api_key.is_empty()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("gemini_api_key", &redact(&self.gemini_api_key))
            .field("backend_url", &self.backend_url)
            .field("backend_anon_key", &redact(&self.backend_anon_key))
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable names: the process environment is
    // shared across the test binary's threads.

    #[test]
    fn resolve_reads_process_environment() {
        unsafe { std::env::set_var("BOUSSALA_TEST_RESOLVE", "from-env") };
        assert_eq!(resolve("BOUSSALA_TEST_RESOLVE"), "from-env");
    }

    #[test]
    fn resolve_returns_empty_for_absent_key() {
        assert_eq!(resolve("BOUSSALA_TEST_DEFINITELY_ABSENT"), "");
    }

    #[test]
    fn resolve_treats_empty_value_as_absent() {
        unsafe { std::env::set_var("BOUSSALA_TEST_EMPTY", "") };
        assert_eq!(resolve("BOUSSALA_TEST_EMPTY"), "");
    }

    #[test]
    fn resolve_first_prefers_earlier_keys() {
        unsafe {
            std::env::set_var("BOUSSALA_TEST_PRIMARY", "primary");
            std::env::set_var("BOUSSALA_TEST_SECONDARY", "secondary");
        }
        assert_eq!(
            resolve_first(&["BOUSSALA_TEST_PRIMARY", "BOUSSALA_TEST_SECONDARY"]),
            "primary"
        );
        assert_eq!(
            resolve_first(&["BOUSSALA_TEST_UNSET_PRIMARY", "BOUSSALA_TEST_SECONDARY"]),
            "secondary"
        );
    }

    #[test]
    fn ai_configured_tracks_key_presence() {
        let mut config = AppConfig {
            gemini_api_key: String::new(),
            backend_url: "https://example.supabase.co".to_string(),
            backend_anon_key: "anon".to_string(),
        };
        assert!(!config.ai_configured());

        config.gemini_api_key = "key".to_string();
        assert!(config.ai_configured());
    }

    #[test]
    fn debug_redacts_credentials() {
        let config = AppConfig {
            gemini_api_key: "secret-key".to_string(),
            backend_url: "https://example.supabase.co".to_string(),
            backend_anon_key: String::new(),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("<unset>"));
    }
}
