//! Provider variant and request payload types.
//!
//! Exactly two protocols are supported: a cloud chat-completion API that
//! references images by URL, and a local-model API that takes inline base64
//! images. The variant is an explicit enum; endpoint inspection is only a
//! fallback for configs that don't name one.

use super::ollama::LocalModelPayload;
use super::openai::ChatCompletionPayload;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Substring identifying a locally hosted model server in an endpoint URL.
pub const LOCAL_MODEL_MARKER: &str = "ollama";

/// The request/response protocol spoken by the configured endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderVariant {
    /// OpenAI-style `/chat/completions`
    CloudChat,
    /// Ollama-style local model server
    LocalModel,
}

impl ProviderVariant {
    /// Infer the variant from an endpoint URL.
    ///
    /// Endpoints containing the lowercase local-model marker select
    /// `LocalModel`; everything else is treated as a cloud chat API. The match
    /// is case-sensitive, so set `provider.kind` for unusual host names.
    pub fn from_endpoint_hint(endpoint: &str) -> Self {
        if endpoint.contains(LOCAL_MODEL_MARKER) {
            Self::LocalModel
        } else {
            Self::CloudChat
        }
    }

    /// Whether requests carry a bearer token.
    pub fn requires_api_key(self) -> bool {
        matches!(self, Self::CloudChat)
    }
}

impl fmt::Display for ProviderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CloudChat => write!(f, "cloud_chat"),
            Self::LocalModel => write!(f, "local_model"),
        }
    }
}

/// A provider-specific JSON request body, built per call.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProviderPayload {
    ChatCompletion(ChatCompletionPayload),
    LocalModel(LocalModelPayload),
}

impl ProviderPayload {
    /// The protocol this payload is shaped for.
    pub fn variant(&self) -> ProviderVariant {
        match self {
            Self::ChatCompletion(_) => ProviderVariant::CloudChat,
            Self::LocalModel(_) => ProviderVariant::LocalModel,
        }
    }

    /// Number of images carried, by reference or inline.
    pub fn image_count(&self) -> usize {
        match self {
            Self::ChatCompletion(p) => p.image_urls().count(),
            Self::LocalModel(p) => p.images().len(),
        }
    }
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
