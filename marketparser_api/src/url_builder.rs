//! Absolute URL construction for API paths.

use url::Url;

use crate::Error;

/// Production origin and API root.
pub const DEFAULT_BASE_URL: &str = "https://cp.marketparser.ru/api/v2";

/// Joins `path` onto `base` and adds the `page` query parameter.
///
/// The service treats a missing `page` parameter as the first page, so it is
/// only sent for pages after the first.
pub fn build_url(base: &str, path: &str, page: u32) -> Result<Url, Error> {
    let mut url = Url::parse(base).map_err(|e| {
        tracing::error!("Invalid base URL {}: {}", base, e);
        Error::Config(e.to_string())
    })?;

    let joined = format!("{}{}", url.path().trim_end_matches('/'), path);
    url.set_path(&joined);

    if page > 1 {
        url.query_pairs_mut().append_pair("page", &page.to_string());
    }

    Ok(url)
}
