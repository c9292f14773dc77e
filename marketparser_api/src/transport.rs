//! HTTP transport: a single request/response round-trip.
//!
//! The [`Client`](crate::Client) builds an [`HttpRequest`] and hands it to a
//! [`Transport`]; the transport only moves bytes and reports the status code.
//! Status interpretation is left to [`decode_response`](crate::decode_response).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;
use url::Url;

use crate::Error;

/// Per-request timeout applied by [`ReqwestTransport`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// An outgoing request, fully assembled by the client.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Status code and full body of a response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Lossy UTF-8 view of the body, for logging.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Executes one HTTP round-trip.
///
/// Implementations must not retry and must not interpret the status code.
/// Network, timeout and body-read failures map to [`Error::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, Error>;
}

/// Default transport backed by a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with the fixed [`REQUEST_TIMEOUT`].
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::transport(e)
            })?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, Error> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let req = builder.build().map_err(|e| {
            tracing::error!("Failed to build request: {}", e);
            Error::RequestConstruction(e.to_string())
        })?;

        let resp = self.client.execute(req).await.map_err(|e| {
            tracing::error!("Something went wrong while doing request: {}", e);
            Error::transport(e)
        })?;

        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::transport(e)
        })?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
