//! Image byte fetching for providers that need inline images.
//!
//! Accepts `http(s)://` URLs, `data:` URLs, `file://` URLs and plain
//! filesystem paths.

use crate::error::{Result, StylistError};
use async_trait::async_trait;
use base64::Engine;
use std::time::Duration;

/// Source of raw image bytes.
///
/// Uses `async_trait` so the service can hold an `Arc<dyn ImageFetcher>`.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch the bytes behind an image reference.
    async fn fetch(&self, reference: &str) -> Result<Vec<u8>>;
}

/// Fetcher backed by `reqwest` for URLs and `tokio::fs` for local files.
#[derive(Clone)]
pub struct HttpImageFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpImageFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self::with_client(reqwest::Client::new(), timeout)
    }

    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    async fn fetch_url(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| StylistError::transport("Image fetch", &e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StylistError::Transport {
                message: format!("Image fetch HTTP {status} for {url}"),
                status_code: Some(status.as_u16()),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| StylistError::transport("Image body read", &e))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, reference: &str) -> Result<Vec<u8>> {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return self.fetch_url(reference).await;
        }
        if let Some(rest) = reference.strip_prefix("data:") {
            return decode_data_url(rest);
        }

        let path = reference.strip_prefix("file://").unwrap_or(reference);
        tokio::fs::read(path)
            .await
            .map_err(|e| StylistError::InvalidInput(format!("Failed to read image {path}: {e}")))
    }
}

/// Decode the part of a `data:` URL after the scheme. Only base64 is supported.
fn decode_data_url(rest: &str) -> Result<Vec<u8>> {
    let (meta, data) = rest
        .split_once(',')
        .ok_or_else(|| StylistError::InvalidInput("data URL has no ',' separator".to_string()))?;
    if !meta.ends_with(";base64") {
        return Err(StylistError::InvalidInput(
            "only base64 data URLs are supported".to_string(),
        ));
    }
    base64::engine::general_purpose::STANDARD
        .decode(data)
        .map_err(|e| StylistError::InvalidInput(format!("Invalid base64 in data URL: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> HttpImageFetcher {
        HttpImageFetcher::new(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_fetch_http_url() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shirt.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
            .mount(&mock_server)
            .await;

        let bytes = fetcher()
            .fetch(&format!("{}/shirt.jpg", mock_server.uri()))
            .await
            .unwrap();
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
    }

    #[tokio::test]
    async fn test_fetch_http_404_is_transport_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = fetcher()
            .fetch(&format!("{}/missing.jpg", mock_server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StylistError::Transport {
                status_code: Some(404),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_fetch_local_file_and_file_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[1, 2, 3]).unwrap();
        let path = file.path().to_string_lossy().to_string();

        assert_eq!(fetcher().fetch(&path).await.unwrap(), vec![1, 2, 3]);
        assert_eq!(
            fetcher().fetch(&format!("file://{path}")).await.unwrap(),
            vec![1, 2, 3]
        );
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let err = fetcher().fetch("/nonexistent/stylist/shirt.jpg").await.unwrap_err();
        assert!(matches!(err, StylistError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_fetch_data_url() {
        let bytes = fetcher().fetch("data:image/png;base64,AQID").await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);

        assert!(fetcher().fetch("data:text/plain,hello").await.is_err());
    }
}
