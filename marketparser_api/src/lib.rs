//! Async client for the MarketParser price comparison API.
//!
//! Lists campaigns, uploads price catalogs, creates competitor price reports
//! and pages through their results. Every endpoint goes through the same
//! pipeline: [`build_url`], a [`Transport`] round-trip, then
//! [`decode_response`]; list endpoints repeat it via [`Client::paginate`].

mod client;
mod debug;
mod decode;
mod endpoints;
mod errors;
mod pagination;
mod transport;
pub mod types;
mod url_builder;

pub use self::client::{Client, API_KEY_HEADER};
pub use self::debug::{DebugLogger, StdoutLogger, TracingLogger};
pub use self::decode::{decode_response, STATUS_OK};
pub use self::errors::{BoxError, Error};
pub use self::pagination::{collect_pages, Page, Pagination, FIRST_PAGE};
pub use self::transport::{HttpRequest, RawResponse, ReqwestTransport, Transport, REQUEST_TIMEOUT};
pub use self::url_builder::{build_url, DEFAULT_BASE_URL};
