//! Local-model request shape (Ollama).
//!
//! Local servers can't fetch remote URLs themselves, so images travel inline
//! as base64 strings. No authentication.

use serde::Serialize;
use serde_json::Value;

/// Where the model's answer lives in a local-model envelope.
pub(crate) const CONTENT_PATH: &str = "message.content";

/// Request body for a local model server.
#[derive(Debug, Clone, Serialize)]
pub struct LocalModelPayload {
    model: String,
    prompt: String,
    images: Vec<String>,
    stream: bool,
    format: String,
}

impl LocalModelPayload {
    /// `images` are already base64-encoded.
    pub(crate) fn new(model: &str, prompt: String, images: Vec<String>) -> Self {
        Self {
            model: model.to_string(),
            prompt,
            images,
            stream: false,
            format: "json".to_string(),
        }
    }

    /// Base64-encoded images, in fetch order.
    pub fn images(&self) -> &[String] {
        &self.images
    }
}

/// Pull `message.content` out of an envelope.
pub(crate) fn extract_content(envelope: &Value) -> Option<&str> {
    envelope.pointer("/message/content").and_then(Value::as_str)
}
