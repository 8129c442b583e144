//! Cache time-to-live constants.

/// How long a generated insight stays valid: one hour, in milliseconds.
pub const INSIGHT_TTL_MS: i64 = 3_600_000;

/// Read a TTL override from the environment, falling back to `default_ms`
/// when the variable is absent or unparseable.
pub fn ttl_with_env(env_key: &str, default_ms: i64) -> i64 {
    std::env::var(env_key)
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(default_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_parses_from_env() {
        unsafe { std::env::set_var("BOUSSALA_TEST_TTL_MS", "250") };
        assert_eq!(ttl_with_env("BOUSSALA_TEST_TTL_MS", INSIGHT_TTL_MS), 250);
    }

    #[test]
    fn garbage_falls_back_to_default() {
        unsafe { std::env::set_var("BOUSSALA_TEST_TTL_BAD", "soon") };
        assert_eq!(ttl_with_env("BOUSSALA_TEST_TTL_BAD", 42), 42);
        assert_eq!(ttl_with_env("BOUSSALA_TEST_TTL_UNSET", 42), 42);
    }
}
