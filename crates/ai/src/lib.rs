//! `boussala-ai`
//!
//! **Responsibility:** AI-generated business insights.
//!
//! This crate is a boundary, not part of the domain model:
//! - It consumes read-only snapshots (`boussala-core`) and never mutates
//!   domain state.
//! - Insight generators degrade to fixed localized fallbacks on any failure;
//!   only the interactive chat adapter surfaces errors to its caller.
//! - Finished insights are cached by dataset fingerprint (`boussala-cache`),
//!   so unchanged data never triggers a second remote call within the TTL.

pub mod chat;
pub mod client;
pub mod context;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod fingerprint;
pub mod postprocess;
pub mod prompt;

pub use chat::{ChatRole, ChatStream, ChatTurn};
pub use client::{GeminiClient, MODEL_NAME};
pub use engine::InsightEngine;
pub use error::InsightError;
