use std::time::Duration;

use bytes::BytesMut;
use futures_util::StreamExt;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use shortener_logging::shortener_debug;

use crate::decode::decode_body;
use crate::{FailureKind, ShortenError, ShortenPayload};

pub const DEFAULT_ENDPOINT: &str = "https://url.omoknooni.link/api/conv";

#[derive(Debug, Clone)]
pub struct ShortenSettings {
    pub endpoint: String,
    /// `None` keeps the transport default.
    pub connect_timeout: Option<Duration>,
    /// `None` keeps the transport default.
    pub request_timeout: Option<Duration>,
    pub max_body_bytes: u64,
}

impl Default for ShortenSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Exchanges a long URL for a short one.
#[async_trait::async_trait]
pub trait Shortener: Send + Sync {
    async fn shorten(&self, url: &str) -> Result<String, ShortenError>;
}

/// Sends one POST per call to the configured endpoint. Never retries.
#[derive(Debug, Clone)]
pub struct ReqwestShortener {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    max_body_bytes: u64,
}

impl ReqwestShortener {
    pub fn new(settings: ShortenSettings) -> Result<Self, ShortenError> {
        let endpoint = reqwest::Url::parse(&settings.endpoint)
            .map_err(|err| ShortenError::new(FailureKind::InvalidEndpoint, err.to_string()))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ShortenError::new(FailureKind::Client, err.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            max_body_bytes: settings.max_body_bytes,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    fn too_large(&self, actual: u64) -> ShortenError {
        ShortenError::new(
            FailureKind::TooLarge {
                max_bytes: self.max_body_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl Shortener for ReqwestShortener {
    async fn shorten(&self, url: &str) -> Result<String, ShortenError> {
        let body = serde_json::to_vec(&ShortenPayload::new(url))
            .map_err(|err| ShortenError::new(FailureKind::Client, err.to_string()))?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(
                ACCEPT,
                HeaderValue::from_static("application/json, text/plain, */*"),
            )
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShortenError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_body_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.max_body_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        shortener_debug!(
            "Shorten response status={} bytes={} content_type={:?}",
            status,
            bytes.len(),
            content_type
        );

        decode_body(&bytes, content_type.as_deref())
            .map_err(|err| ShortenError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ShortenError {
    if err.is_timeout() {
        return ShortenError::new(FailureKind::Timeout, err.to_string());
    }
    ShortenError::new(FailureKind::Network, err.to_string())
}
