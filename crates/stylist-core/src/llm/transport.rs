//! HTTP transport for sending a payload to the model endpoint.
//!
//! A trait seam so the service can be exercised without a network; the
//! production implementation is a thin `reqwest` wrapper.

use super::provider::ProviderPayload;
use crate::error::{Result, StylistError};
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// One outbound model call.
#[derive(Debug, Clone, Copy)]
pub struct TransportRequest<'a> {
    pub endpoint: &'a str,
    /// Sent as `Authorization: Bearer <token>` when present
    pub bearer_token: Option<&'a str>,
    pub payload: &'a ProviderPayload,
    pub timeout: Duration,
}

/// Sends a JSON payload and returns the raw 2xx response body.
///
/// Implementations map connection failures, timeouts and non-2xx statuses to
/// `StylistError::Transport`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest<'_>) -> Result<Vec<u8>>;
}

/// `reqwest`-backed transport.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest<'_>) -> Result<Vec<u8>> {
        let start = Instant::now();

        let mut builder = self
            .client
            .post(request.endpoint)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .json(request.payload)
            .timeout(request.timeout);
        if let Some(token) = request.bearer_token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| StylistError::transport("Model request", &e))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(StylistError::Transport {
                message: format!("HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| StylistError::transport("Model response read", &e))?;

        tracing::debug!(
            "Model call to {} returned {} bytes in {}ms",
            request.endpoint,
            body.len(),
            start.elapsed().as_millis()
        );
        Ok(body.to_vec())
    }
}
