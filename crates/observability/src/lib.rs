//! `boussala-observability`
//!
//! **Responsibility:** process-wide tracing/logging setup.
//!
//! The insight layer logs every absorbed failure (storage, remote call) at
//! `warn`; this crate is where those records get a subscriber.

use tracing_subscriber::EnvFilter;

/// Initialize logging with the default filter (`boussala=info`).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    init_with_filter("boussala=info");
}

/// Initialize logging with `default_filter` as the fallback when `RUST_LOG`
/// is not set.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON lines so deployments can ship logs without a parsing step.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init();
        init();
        init_with_filter("warn");
    }
}
