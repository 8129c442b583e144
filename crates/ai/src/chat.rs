//! Streaming chat session over server-sent events.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::client::candidate_text;
use crate::error::InsightError;

/// Assistant persona for the in-app chat.
pub const SYSTEM_INSTRUCTION: &str =
    "أنت مساعد ذكي لتطبيق 'بوصلة'. تتحدث العربية. العملة هي الأوقية.";

/// The two roles the generative API accepts in a conversation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// One prior turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }

    /// The turn as a `contents` entry of the request payload.
    pub(crate) fn as_content(&self) -> Value {
        json!({"role": self.role.as_str(), "parts": [{"text": self.text}]})
    }
}

/// Forward-only stream of response text chunks.
///
/// Finite and not restartable; dropping it stops the pump task, which is the
/// only cancellation there is.
#[derive(Debug)]
pub struct ChatStream {
    inner: UnboundedReceiverStream<Result<String, InsightError>>,
}

impl ChatStream {
    /// Spawn a task that reads SSE lines off `response` and forwards each
    /// chunk's candidate text.
    pub(crate) fn from_response(response: reqwest::Response) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(pump(response, tx));
        Self {
            inner: UnboundedReceiverStream::new(rx),
        }
    }
}

impl Stream for ChatStream {
    type Item = Result<String, InsightError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

async fn pump(response: reqwest::Response, tx: UnboundedSender<Result<String, InsightError>>) {
    let mut bytes = response.bytes_stream();
    // Lines can straddle network chunks; buffer raw bytes and split on '\n'.
    let mut buffer: Vec<u8> = Vec::new();

    while let Some(chunk) = bytes.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(err) => {
                let _ = tx.send(Err(InsightError::Http(err)));
                return;
            }
        };
        buffer.extend_from_slice(&chunk);

        while let Some(newline) = buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = buffer.drain(..=newline).collect();
            let line = String::from_utf8_lossy(&line);
            let Some(data) = sse_data(line.trim_end()) else {
                continue;
            };
            if let Some(text) = chunk_text(data)
                && tx.send(Ok(text)).is_err()
            {
                // Receiver dropped: the caller cancelled.
                return;
            }
        }
    }
}

/// Payload of an SSE `data:` line, if that is what `line` is.
pub(crate) fn sse_data(line: &str) -> Option<&str> {
    line.strip_prefix("data:").map(str::trim_start)
}

/// Candidate text carried by one streamed chunk.
pub(crate) fn chunk_text(data: &str) -> Option<String> {
    let body: Value = serde_json::from_str(data).ok()?;
    candidate_text(&body)
}
