//! `boussala-config`
//!
//! **Responsibility:** runtime configuration lookup.
//!
//! Values come from one of two sources: a `.env` file (local development)
//! or the process environment (deployments). First non-empty match wins,
//! absence is an empty string, and lookup never fails.

pub mod env;

pub use env::{resolve, resolve_first, AppConfig};
