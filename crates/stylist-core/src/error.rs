//! Error types for the style analysis client.
//!
//! Errors are split by where the contract broke: caller input, the transport,
//! the provider envelope, or the model's own JSON answer. Each variant carries
//! enough context (raw content, missing key, HTTP status) to debug a
//! misbehaving model.

use thiserror::Error;

/// Top-level error type for style analysis calls.
#[derive(Error, Debug)]
pub enum StylistError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The caller supplied unusable input (e.g. no images)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Connection failure, timeout, or non-2xx response
    #[error("Failed to connect to the AI API endpoint: {message}")]
    Transport {
        message: String,
        status_code: Option<u16>,
    },

    /// The HTTP body was not valid JSON
    #[error("Malformed API response envelope: {0}")]
    MalformedEnvelope(String),

    /// The envelope did not contain the content string at the expected path
    #[error("Could not find the content string at `{0}` in the API response")]
    MissingContentField(&'static str),

    /// The content string was not a JSON object
    #[error("Failed to decode the nested JSON from the API response: {message}. Raw content: {raw}")]
    MalformedPayload { message: String, raw: String },

    /// The model's JSON answer lacks one of the required keys
    #[error("The final JSON data is missing the required key: '{0}'")]
    MissingResultKey(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl StylistError {
    /// Build a transport error from a failed reqwest call.
    pub(crate) fn transport(context: &str, err: &reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            "timed out"
        } else if err.is_connect() {
            "connection failed"
        } else {
            "request failed"
        };
        Self::Transport {
            message: format!("{context} {kind}: {err}"),
            status_code: err.status().map(|s| s.as_u16()),
        }
    }
}

/// Convenience type alias for stylist results.
pub type Result<T> = std::result::Result<T, StylistError>;
