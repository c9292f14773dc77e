//! Page-by-page aggregation of list endpoints.
//!
//! List responses announce a `total`; pages are requested one after another
//! until the accumulated item count reaches it.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::Error;

/// Page number the service treats as the start of a listing.
pub const FIRST_PAGE: u32 = 1;

/// One page of a list response: the reported total plus this page's items.
pub trait Page: DeserializeOwned {
    type Item;

    /// Total number of items the service reports for the whole listing.
    fn total(&self) -> i64;

    fn into_items(self) -> Vec<Self::Item>;
}

/// Pagination settings, fixed when the client is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number sent for the first request.
    pub first_page: u32,
    /// Upper bound on requests per listing. `None` follows the reported
    /// total without limit.
    pub max_pages: Option<u32>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            first_page: FIRST_PAGE,
            max_pages: None,
        }
    }
}

impl Pagination {
    /// Sets the maximum number of pages fetched per listing.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }
}

/// Calls `fetch` with increasing page numbers and concatenates the items.
///
/// Stops once `total <= items.len()` after a page is appended. Any error from
/// `fetch` is returned as-is and the items gathered so far are dropped.
pub async fn collect_pages<P, F, Fut>(
    settings: &Pagination,
    mut fetch: F,
) -> Result<Vec<P::Item>, Error>
where
    P: Page,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<P, Error>>,
{
    let mut items = Vec::new();
    let mut page = settings.first_page;
    let mut fetched_pages = 0u32;

    loop {
        let body = fetch(page).await?;
        fetched_pages += 1;

        let total = body.total();
        items.extend(body.into_items());
        tracing::debug!(
            "Fetched page {} ({} of {} items)",
            page,
            items.len(),
            total
        );

        if total <= items.len() as i64 {
            break;
        }

        if let Some(max_pages) = settings.max_pages {
            if fetched_pages >= max_pages {
                tracing::error!(
                    "Page limit of {} reached with {} of {} items",
                    max_pages,
                    items.len(),
                    total
                );
                return Err(Error::PageLimit {
                    max_pages,
                    fetched: items.len(),
                    total,
                });
            }
        }

        page = page.checked_add(1).ok_or_else(|| {
            tracing::error!("Page counter overflowed with {} of {} items", items.len(), total);
            Error::PageOverflow { last_page: page }
        })?;
    }

    Ok(items)
}
