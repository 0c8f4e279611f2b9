//! Stylist Core - style-match analysis of product images via multimodal LLMs.
//!
//! Sends one or more product images plus a free-text style profile to a
//! multimodal model and parses its JSON answer into a typed verdict.
//!
//! # Architecture
//!
//! ```text
//! images + profile → RequestBuilder → Transport (HTTP) → interpret → StyleAnalysisResult
//! ```
//!
//! Two provider protocols are supported: a cloud chat-completion API
//! (images by URL, bearer auth) and a local model server (inline base64
//! images, no auth).
//!
//! # Usage
//!
//! ```rust,ignore
//! use stylist_core::ImageStylist;
//!
//! #[tokio::main]
//! async fn main() -> stylist_core::Result<()> {
//!     let stylist = ImageStylist::new(
//!         &std::env::var("OPENAI_API_KEY").unwrap_or_default(),
//!         "https://api.openai.com/v1/chat/completions",
//!         "gpt-4o",
//!     )?;
//!
//!     let images = vec!["https://example.com/blazer.jpg".to_string()];
//!     let result = stylist
//!         .get_style_analysis(&images, "Muted colors, tailored blazers.", "en")
//!         .await?;
//!     println!("Match: {}", result.is_style_match());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod llm;
pub mod service;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, Result, StylistError};
pub use llm::{ProviderPayload, ProviderVariant};
pub use service::ImageStylist;
pub use types::{StyleAnalysisRequest, StyleAnalysisResult, DEFAULT_LANGUAGE};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
