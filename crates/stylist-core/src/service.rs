//! Service facade: the single entry point for a style analysis call.
//!
//! Composes request building, one HTTP call, and response interpretation.
//! The service holds no mutable state, so one instance can be shared across
//! tasks.

use crate::config::{Config, RequestConfig};
use crate::error::{ConfigError, Result};
use crate::llm::{
    interpret, resolve_env_var, HttpImageFetcher, HttpTransport, ImageFetcher, ProviderVariant,
    RequestBuilder, Transport, TransportRequest,
};
use crate::types::{StyleAnalysisRequest, StyleAnalysisResult};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Client that asks a multimodal model whether a product fits a style profile.
pub struct ImageStylist {
    endpoint: String,
    api_key: Option<String>,
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
    timeout: Duration,
    default_language: String,
}

impl ImageStylist {
    /// Create a client, inferring the provider protocol from `endpoint`.
    pub fn new(api_key: &str, endpoint: &str, model: &str) -> Result<Self> {
        Self::with_variant(
            api_key,
            endpoint,
            model,
            ProviderVariant::from_endpoint_hint(endpoint),
        )
    }

    /// Create a client for an explicit provider protocol.
    ///
    /// Cloud endpoints require a non-empty API key; local ones ignore it.
    pub fn with_variant(
        api_key: &str,
        endpoint: &str,
        model: &str,
        variant: ProviderVariant,
    ) -> Result<Self> {
        Self::build(
            variant,
            Some(api_key.trim().to_string()).filter(|k| !k.is_empty()),
            endpoint,
            model,
            &RequestConfig::default(),
        )
    }

    /// Create a client from configuration, resolving `${ENV_VAR}` keys.
    ///
    /// The configuration is validated again here, so overrides applied after
    /// loading cannot bypass the range checks.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let provider = &config.provider;
        Self::build(
            provider.variant(),
            resolve_env_var(provider.api_key.trim()),
            &provider.endpoint,
            &provider.model,
            &config.request,
        )
    }

    fn build(
        variant: ProviderVariant,
        api_key: Option<String>,
        endpoint: &str,
        model: &str,
        request: &RequestConfig,
    ) -> Result<Self> {
        if endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError("endpoint must not be empty".into()).into());
        }
        if model.trim().is_empty() {
            return Err(ConfigError::ValidationError("model must not be empty".into()).into());
        }
        if variant.requires_api_key() && api_key.is_none() {
            return Err(ConfigError::ValidationError(format!(
                "API key not set for {variant} endpoint {endpoint}. \
                 Set provider.api_key or the OPENAI_API_KEY env var."
            ))
            .into());
        }

        let client = reqwest::Client::new();
        let fetcher = Arc::new(HttpImageFetcher::with_client(
            client.clone(),
            Duration::from_millis(request.image_fetch_timeout_ms),
        ));

        Ok(Self {
            endpoint: endpoint.to_string(),
            api_key: if variant.requires_api_key() {
                api_key
            } else {
                None
            },
            builder: RequestBuilder::new(variant, model, fetcher)
                .with_max_tokens(request.max_tokens),
            transport: Arc::new(HttpTransport::with_client(client)),
            timeout: Duration::from_millis(request.timeout_ms),
            default_language: request.language.clone(),
        })
    }

    /// Replace the HTTP transport.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Replace the image fetcher used for local-model inline images.
    pub fn with_image_fetcher(mut self, fetcher: Arc<dyn ImageFetcher>) -> Self {
        self.builder = self.builder.with_fetcher(fetcher);
        self
    }

    pub fn variant(&self) -> ProviderVariant {
        self.builder.variant()
    }

    /// Analyze product images against a style profile.
    ///
    /// Performs exactly one model call. An empty `images` slice fails with
    /// `InvalidInput` before any network activity. Nothing is retried.
    pub async fn get_style_analysis(
        &self,
        images: &[String],
        style_profile: &str,
        language: &str,
    ) -> Result<StyleAnalysisResult> {
        let request = StyleAnalysisRequest::new(images, style_profile, language)?;
        let payload = self.builder.build(&request).await?;

        tracing::debug!(
            "Sending {} image(s) to {} endpoint {}",
            payload.image_count(),
            self.variant(),
            self.endpoint
        );
        let start = Instant::now();

        let body = self
            .transport
            .send(TransportRequest {
                endpoint: &self.endpoint,
                bearer_token: self.api_key.as_deref(),
                payload: &payload,
                timeout: self.timeout,
            })
            .await?;

        let result = interpret(&body, self.variant());
        match &result {
            Ok(r) => tracing::debug!(
                "Style analysis complete in {}ms (match: {})",
                start.elapsed().as_millis(),
                r.is_style_match()
            ),
            Err(e) => tracing::debug!("Model answer rejected: {e}"),
        }
        result
    }

    /// Like [`get_style_analysis`](Self::get_style_analysis), in the configured default language.
    pub async fn analyze(&self, images: &[String], style_profile: &str) -> Result<StyleAnalysisResult> {
        self.get_style_analysis(images, style_profile, &self.default_language)
            .await
    }
}

impl std::fmt::Debug for ImageStylist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageStylist")
            .field("endpoint", &self.endpoint)
            .field("variant", &self.variant())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
