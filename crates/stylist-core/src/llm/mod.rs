//! Multimodal LLM integration for style analysis.
//!
//! Builds provider-specific request payloads (cloud chat-completion or local
//! model), sends them over a pluggable transport, and interprets the
//! doubly-encoded JSON answer.

pub(crate) mod builder;
pub(crate) mod fetch;
pub(crate) mod interpreter;
pub(crate) mod ollama;
pub(crate) mod openai;
pub(crate) mod prompt;
pub(crate) mod provider;
pub(crate) mod transport;

pub use builder::{RequestBuilder, DEFAULT_MAX_TOKENS};
pub use fetch::{HttpImageFetcher, ImageFetcher};
pub use interpreter::interpret;
pub use ollama::LocalModelPayload;
pub use openai::ChatCompletionPayload;
pub use prompt::{build_style_prompt, RESULT_KEYS};
pub use provider::{resolve_env_var, ProviderPayload, ProviderVariant, LOCAL_MODEL_MARKER};
pub use transport::{HttpTransport, Transport, TransportRequest};
