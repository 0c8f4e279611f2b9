//! Sub-configuration structs with defaults.

use crate::llm::ProviderVariant;
use serde::{Deserialize, Serialize};

/// Which model API to talk to and how to authenticate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Explicit provider protocol. When omitted it is inferred from `endpoint`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ProviderVariant>,

    /// Full URL the request is POSTed to
    pub endpoint: String,

    /// API key (supports ${ENV_VAR} syntax). Unused for local models.
    pub api_key: String,

    /// Model identifier
    pub model: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: None,
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: "${OPENAI_API_KEY}".to_string(),
            model: "gpt-4o".to_string(),
        }
    }
}

impl ProviderConfig {
    /// The provider protocol in effect: explicit `kind`, else endpoint inference.
    pub fn variant(&self) -> ProviderVariant {
        self.kind
            .unwrap_or_else(|| ProviderVariant::from_endpoint_hint(&self.endpoint))
    }
}

/// Per-call request settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Timeout for the model call in milliseconds
    pub timeout_ms: u64,

    /// Timeout for each inline image fetch (local models) in milliseconds
    pub image_fetch_timeout_ms: u64,

    /// Token budget for the cloud chat-completion reply
    pub max_tokens: u32,

    /// Default answer language when the caller doesn't pass one
    pub language: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 180_000,
            image_fetch_timeout_ms: 30_000,
            max_tokens: 800,
            language: "en".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
