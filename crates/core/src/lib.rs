//! `boussala-core` — domain snapshot types for the Boussala retail app.
//!
//! These are **read models**, not aggregates: the insight layer consumes them
//! read-only and never mutates domain state through them.

pub mod currency;
pub mod snapshot;

pub use currency::format_ouguiya;
pub use snapshot::{Client, Expense, Product, SalesPoint, Supplier};
