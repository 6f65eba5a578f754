//! Event envelopes exchanged over the chat socket.
//!
//! Every text frame is a JSON object `{"event": <name>, "data": <payload>}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Event name clients use to submit a chat message.
pub const SEND_MESSAGE: &str = "send_message";

/// A frame received from a client, before its payload is interpreted.
#[derive(Debug, Deserialize)]
pub struct ClientFrame {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

/// Payload of a `send_message` event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendMessage {
    #[serde(default)]
    pub message: Option<String>,

    /// Language name or code; the configured default applies when absent
    #[serde(default, rename = "targetLanguage")]
    pub target_language: Option<String>,
}

/// A translated chat message, broadcast to every connected client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatedMessage {
    pub original_text: String,
    pub translated_text: String,
    /// Provider code of the language the text was translated into
    pub target_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

/// Events the server emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Sent to all clients, including the one that submitted the message
    ReceiveMessage(TranslatedMessage),
    /// Sent only to the client whose message failed
    Error(ErrorPayload),
}

impl ServerEvent {
    pub fn translation_failed(err: &RelayError) -> Self {
        ServerEvent::Error(ErrorPayload {
            error: format!("Translation failed: {}", err),
        })
    }
}

/// Why a submitted message could not be relayed.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("No message content provided.")]
    EmptyMessage,

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("{0}")]
    UnsupportedLanguage(String),

    #[error("{0}")]
    Translation(String),
}

impl From<anyhow::Error> for RelayError {
    /// Keeps the whole context chain.
    fn from(err: anyhow::Error) -> Self {
        RelayError::Translation(format!("{:#}", err))
    }
}
