//! `boussala-cache`
//!
//! **Responsibility:** local cache for generated insights.
//!
//! Remote generation is slow and quota-bound, so finished insights are kept
//! in a small SQLite database for up to an hour. Keys carry dataset
//! fingerprints, which makes invalidation free: a materially different
//! dataset produces a different key and therefore a miss.
//!
//! Caching is **best-effort**. Every storage failure is logged and treated
//! as a miss; nothing in here may fail a caller.

pub mod store;
pub mod ttl;
pub mod value;

pub use store::InsightCache;
pub use ttl::{ttl_with_env, INSIGHT_TTL_MS};
pub use value::CachedValue;
