//! HTTP client for the Generative Language REST API.

use serde_json::{json, Value};

use crate::chat::{ChatStream, ChatTurn, SYSTEM_INSTRUCTION};
use crate::error::InsightError;

pub const MODEL_NAME: &str = "gemini-2.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Thin wrapper over `generateContent` / `streamGenerateContent`.
///
/// One call, one answer; retries and timeouts are left to the transport.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: MODEL_NAME.to_string(),
        }
    }

    /// Point the client at a different host (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Send `prompt` and return the first candidate's text.
    pub async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let payload = json!({
            "contents": [{"parts": [{"text": prompt}]}],
        });

        let response = self.http.post(&url).json(&payload).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::Service { status, body });
        }

        let body: Value = response.json().await?;
        candidate_text(&body)
            .ok_or_else(|| InsightError::Malformed("no candidate text in response".to_string()))
    }

    /// Open a streaming chat session: replay `history`, send `message`, and
    /// hand back a stream of text chunks.
    pub async fn stream_chat(
        &self,
        history: &[ChatTurn],
        message: &str,
    ) -> Result<ChatStream, InsightError> {
        let url = format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse&key={}",
            self.base_url, self.model, self.api_key
        );

        let mut contents: Vec<Value> = history.iter().map(ChatTurn::as_content).collect();
        contents.push(ChatTurn::user(message).as_content());

        let payload = json!({
            "system_instruction": {"parts": [{"text": SYSTEM_INSTRUCTION}]},
            "contents": contents,
        });

        let response = self.http.post(&url).json(&payload).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::Service { status, body });
        }

        Ok(ChatStream::from_response(response))
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response body.
pub(crate) fn candidate_text(body: &Value) -> Option<String> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_text_walks_the_response_shape() {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "نصيحة"}]},
                "finishReason": "STOP"
            }]
        });
        assert_eq!(candidate_text(&body).as_deref(), Some("نصيحة"));
    }

    #[test]
    fn candidate_text_rejects_empty_candidates() {
        assert!(candidate_text(&json!({"candidates": []})).is_none());
        assert!(candidate_text(&json!({})).is_none());
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let client = GeminiClient::new("k").with_base_url("http://localhost:9099/");
        assert_eq!(client.base_url, "http://localhost:9099");
    }
}
