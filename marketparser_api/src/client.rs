//! HTTP client for the MarketParser API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    debug::{format_headers, DebugLogger},
    decode::decode_response,
    pagination::{collect_pages, Page, Pagination, FIRST_PAGE},
    transport::{HttpRequest, RawResponse, ReqwestTransport, Transport},
    types::Response,
    url_builder::{build_url, DEFAULT_BASE_URL},
    Error,
};

/// Header carrying the account API key.
pub const API_KEY_HEADER: &str = "api-key";

/// HTTP client for the MarketParser API.
///
/// Every request carries the API key and a JSON content type, and is bounded
/// by the transport's 15 second timeout. The client holds no mutable state;
/// the debug logger and pagination settings are fixed when it is built.
pub struct Client {
    api_key: String,
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_url: String,
    transport: Box<dyn Transport>,
    logger: Option<Arc<dyn DebugLogger>>,
    pagination: Pagination,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("debug", &self.logger.is_some())
            .field("pagination", &self.pagination)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for the production API.
    ///
    /// Fails with [`Error::Validation`] when `api_key` is empty.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_transport(api_key, ReqwestTransport::new()?)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Ok(Self::new(api_key)?.at_base_url(base_url))
    }

    /// Points an already built client at `base_url`.
    pub fn at_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(
        api_key: &str,
        transport: impl Transport + 'static,
    ) -> Result<Self, Error> {
        if api_key.is_empty() {
            return Err(Error::Validation("you must specify an API key".to_string()));
        }

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: Box::new(transport),
            logger: None,
            pagination: Pagination::default(),
        })
    }

    /// Mirrors every request and response status to `logger`.
    pub fn with_debug_logger(mut self, logger: Arc<dyn DebugLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Sets the pagination settings used by list endpoints.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    fn debug(&self, line: impl FnOnce() -> String) {
        if let Some(logger) = &self.logger {
            logger.log(&line());
        }
    }

    fn make_request(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<HttpRequest, Error> {
        let api_key = HeaderValue::from_str(&self.api_key).map_err(|e| {
            tracing::error!("API key is not a valid header value: {}", e);
            Error::RequestConstruction(format!("invalid API key header: {}", e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, Error> {
        let is_write = request.method != Method::GET;

        self.debug(|| format!("URL: {} {}", request.method, request.url));
        self.debug(|| format!("HEADERS: {}", format_headers(&request.headers)));
        if is_write {
            let body = request.body.as_deref().unwrap_or_default();
            self.debug(|| format!("BODY: {:?}", String::from_utf8_lossy(body)));
        }

        tracing::debug!("{} {}", request.method, request.url);
        let response = self.transport.send(request).await?;
        tracing::debug!("Response status {}", response.status);

        self.debug(|| format!("RES CODE: {}", response.status));
        if is_write {
            self.debug(|| format!("RES BODY: {:?}", response.body_text()));
        }

        Ok(response)
    }

    /// Sends a GET for `path` at `page` and decodes the response as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, page: u32) -> Result<T, Error> {
        let url = build_url(&self.base_url, path, page)?;
        let request = self.make_request(Method::GET, url, None)?;
        let response = self.execute(request).await?;
        decode_response(&response)
    }

    /// Sends a POST with an optional JSON body and decodes the response as `T`.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, Error> {
        let url = build_url(&self.base_url, path, FIRST_PAGE)?;
        let request = self.make_request(Method::POST, url, body)?;
        let response = self.execute(request).await?;
        decode_response(&response)
    }

    /// Fetches every page of a list endpoint and returns the items in page order.
    pub async fn paginate<P: Page>(&self, path: &str) -> Result<Vec<P::Item>, Error> {
        collect_pages(&self.pagination, |page| async move {
            let envelope: Response<P> = self.get(path, page).await?;
            Ok::<_, Error>(envelope.response)
        })
        .await
    }
}
