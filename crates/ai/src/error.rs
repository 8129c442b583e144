use thiserror::Error;

/// Failures inside the insight layer.
///
/// Insight generators absorb all of these at their public boundary and
/// return a fixed fallback instead; the chat adapter propagates them, since
/// an interactive session cannot degrade silently.
#[derive(Debug, Error)]
pub enum InsightError {
    /// No generative-service credential was resolved.
    #[error("generative service not configured (no API key)")]
    NotConfigured,

    /// Transport-level failure talking to the generative service.
    #[error("request to generative service failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("generative service returned status {status}: {body}")]
    Service { status: u16, body: String },

    /// The response arrived but did not carry usable text.
    #[error("malformed generative response: {0}")]
    Malformed(String),
}
