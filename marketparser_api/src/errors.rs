//! Error types for the API client.

/// Boxed error used by transports to carry the underlying failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured base URL could not be parsed. This is a programming
    /// error rather than a runtime condition.
    #[error("Invalid base URL: {0}")]
    Config(String),

    /// A caller-supplied argument was rejected before any request was sent.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The HTTP request could not be assembled (bad header value, method or URL).
    #[error("Can't create request: {0}")]
    RequestConstruction(String),

    /// Network failure, timeout, or failure reading the response body.
    #[error("Request failed: {0}")]
    Transport(#[source] BoxError),

    /// The request payload could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body did not match the expected shape. `status` tells
    /// whether the success payload (200) or the error envelope was being read.
    #[error("Failed to decode response with status {status}: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered with a non-200 status and an error envelope.
    #[error("API error: {code}: {message}")]
    Api { code: i64, message: String },

    /// Pagination stopped at the configured page limit before the reported
    /// total was reached.
    #[error("Stopped after {max_pages} pages with {fetched} of {total} items fetched")]
    PageLimit {
        max_pages: u32,
        fetched: usize,
        total: i64,
    },

    /// The page counter ran past `u32::MAX` while the reported total was
    /// still out of reach.
    #[error("Page counter overflowed after page {last_page}")]
    PageOverflow { last_page: u32 },

    /// The service accepted the price upload request but reported `success: false`.
    #[error("Price update was not accepted by the service")]
    PriceUpdateRejected,
}

impl Error {
    pub(crate) fn transport(e: impl Into<BoxError>) -> Self {
        Self::Transport(e.into())
    }

    /// Returns the remote error code when the service reported one.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
