//! Request builder: prompt + images into a provider-specific payload.

use super::fetch::ImageFetcher;
use super::ollama::LocalModelPayload;
use super::openai::ChatCompletionPayload;
use super::prompt::build_style_prompt;
use super::provider::{ProviderPayload, ProviderVariant};
use crate::error::{Result, StylistError};
use crate::types::StyleAnalysisRequest;
use base64::Engine;
use std::sync::Arc;

/// Default token budget for the cloud reply.
pub const DEFAULT_MAX_TOKENS: u32 = 800;

/// Builds provider payloads for one configured model.
#[derive(Clone)]
pub struct RequestBuilder {
    variant: ProviderVariant,
    model: String,
    max_tokens: u32,
    fetcher: Arc<dyn ImageFetcher>,
}

impl RequestBuilder {
    pub fn new(variant: ProviderVariant, model: &str, fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self {
            variant,
            model: model.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            fetcher,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub(crate) fn with_fetcher(mut self, fetcher: Arc<dyn ImageFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn variant(&self) -> ProviderVariant {
        self.variant
    }

    /// Build the payload for `request`.
    ///
    /// The cloud shape only references image URLs and performs no I/O. The
    /// local shape fetches and base64-encodes each image; images that fail to
    /// fetch are skipped, but if none succeed the call fails with
    /// `InvalidInput` rather than sending a request with no images.
    pub async fn build(&self, request: &StyleAnalysisRequest) -> Result<ProviderPayload> {
        let prompt = build_style_prompt(request.style_profile(), request.language());

        match self.variant {
            ProviderVariant::CloudChat => Ok(ProviderPayload::ChatCompletion(
                ChatCompletionPayload::new(&self.model, prompt, request.images(), self.max_tokens),
            )),
            ProviderVariant::LocalModel => {
                let images = self.fetch_inline_images(request.images()).await?;
                Ok(ProviderPayload::LocalModel(LocalModelPayload::new(
                    &self.model,
                    prompt,
                    images,
                )))
            }
        }
    }

    async fn fetch_inline_images(&self, references: &[String]) -> Result<Vec<String>> {
        let mut encoded = Vec::with_capacity(references.len());

        for reference in references {
            match self.fetcher.fetch(reference).await {
                Ok(bytes) => {
                    encoded.push(base64::engine::general_purpose::STANDARD.encode(&bytes));
                }
                Err(e) => {
                    tracing::warn!("Skipping image {reference}: {e}");
                }
            }
        }

        if encoded.is_empty() {
            return Err(StylistError::InvalidInput(format!(
                "None of the {} image(s) could be fetched for the local model",
                references.len()
            )));
        }

        tracing::debug!(
            "Inlined {}/{} images for local model",
            encoded.len(),
            references.len()
        );
        Ok(encoded)
    }
}
