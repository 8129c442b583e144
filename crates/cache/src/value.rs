//! Cached payload shapes.

use serde::{Deserialize, Serialize};

/// What an endpoint caches: a single insight sentence or a short tip list.
///
/// The tag travels with the payload, so a hit whose shape does not match
/// the endpoint's expectation is detectable without runtime type sniffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum CachedValue {
    Text(String),
    Tips(Vec<String>),
}

impl CachedValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CachedValue::Text(text) => Some(text),
            CachedValue::Tips(_) => None,
        }
    }

    pub fn as_tips(&self) -> Option<&[String]> {
        match self {
            CachedValue::Tips(tips) => Some(tips),
            CachedValue::Text(_) => None,
        }
    }
}

/// A stored entry: the payload plus its write time in epoch milliseconds.
///
/// An entry is valid iff `now - timestamp <= TTL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CacheEntry {
    pub data: CachedValue,
    pub timestamp: i64,
}
