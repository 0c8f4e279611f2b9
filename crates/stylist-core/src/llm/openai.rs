//! Cloud chat-completion request shape (OpenAI-compatible).
//!
//! One user message whose content is the text prompt followed by one
//! `image_url` part per image, in caller order. Images are referenced, not
//! inlined, so `data:` URLs pass through untouched.

use serde::Serialize;
use serde_json::Value;

/// Where the model's answer lives in a chat-completion envelope.
pub(crate) const CONTENT_PATH: &str = "choices[0].message.content";

/// Request body for a chat-completion endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionPayload {
    model: String,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: String,
    content: Vec<ChatContent>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
enum ChatContent {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
struct ImageUrl {
    url: String,
}

impl ChatCompletionPayload {
    pub(crate) fn new(model: &str, prompt: String, images: &[String], max_tokens: u32) -> Self {
        let mut content = Vec::with_capacity(images.len() + 1);
        content.push(ChatContent::Text { text: prompt });
        content.extend(images.iter().map(|url| ChatContent::ImageUrl {
            image_url: ImageUrl { url: url.clone() },
        }));

        Self {
            model: model.to_string(),
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content,
            }],
            max_tokens,
        }
    }

    /// Image references in the order they will be sent.
    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .flat_map(|m| m.content.iter())
            .filter_map(|part| match part {
                ChatContent::ImageUrl { image_url } => Some(image_url.url.as_str()),
                ChatContent::Text { .. } => None,
            })
    }
}

/// Pull `choices[0].message.content` out of an envelope.
pub(crate) fn extract_content(envelope: &Value) -> Option<&str> {
    envelope
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn urls() -> Vec<String> {
        vec![
            "https://cdn.example.com/front.jpg".to_string(),
            "https://cdn.example.com/back.jpg".to_string(),
            "https://cdn.example.com/front.jpg".to_string(),
        ]
    }

    #[test]
    fn test_payload_shape() {
        let payload = ChatCompletionPayload::new("gpt-4o", "PROMPT".into(), &urls(), 800);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["max_tokens"], 800);
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["role"], "user");

        let content = json["messages"][0]["content"].as_array().unwrap();
        assert_eq!(content.len(), 4);
        assert_eq!(content[0], json!({"type": "text", "text": "PROMPT"}));
        assert_eq!(
            content[2],
            json!({"type": "image_url", "image_url": {"url": "https://cdn.example.com/back.jpg"}})
        );
    }

    #[test]
    fn test_every_image_once_in_order() {
        let payload = ChatCompletionPayload::new("m", "p".into(), &urls(), 10);
        let sent: Vec<&str> = payload.image_urls().collect();
        assert_eq!(sent, urls().iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_extract_content() {
        let envelope = json!({"choices": [{"message": {"content": "{}"}}]});
        assert_eq!(extract_content(&envelope), Some("{}"));

        assert_eq!(extract_content(&json!({"choices": []})), None);
        assert_eq!(extract_content(&json!({"message": {"content": "{}"}})), None);
        assert_eq!(
            extract_content(&json!({"choices": [{"message": {"content": null}}]})),
            None
        );
    }
}
