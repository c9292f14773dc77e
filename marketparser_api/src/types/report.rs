//! Competitor price reports and their per-product results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::pagination::Page;

/// Numeric report identifier. Valid identifiers start at 1.
pub type ReportID = i64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Waiting,
    WaitingForRedownloadErrors,
    InProgress,
    /// The report finished and its results can be fetched.
    Ok,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ReportStatus::Waiting => "WAITING",
                ReportStatus::WaitingForRedownloadErrors => "WAITING_FOR_REDOWNLOAD_ERRORS",
                ReportStatus::InProgress => "IN_PROGRESS",
                ReportStatus::Ok => "OK",
                ReportStatus::Error => "ERROR",
                ReportStatus::Unknown => "UNKNOWN",
            }
        )
    }
}

/// A report as listed by `/campaigns/{id}/reports.json`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: ReportID,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: ReportStatus,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: DateTime<Utc>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_successfully_finished: bool,
    /// Unset until the service picks the report up.
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub count_error_products: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub count_ok_products: i64,
}

impl Report {
    /// True once results can be requested.
    pub fn is_ready(&self) -> bool {
        self.status == ReportStatus::Ok
    }
}

/// One page of the report listing.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportsPage {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub reports: Vec<Report>,
}

impl Page for ReportsPage {
    type Item = Report;

    fn total(&self) -> i64 {
        self.total
    }

    fn into_items(self) -> Vec<Report> {
        self.reports
    }
}

/// Payload returned when a report is created.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatedReport {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: ReportID,
}

/// A competitor offer found for a product.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportProductOffer {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub shop_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub price: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub delivery_price: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub in_stock: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub pickup: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub producer_warranty: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub link_to_offer: String,
}

/// Market statistics gathered for one product of the price.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportProduct {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub yandex_model_id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub yandex_region_id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub yandex_region_name: String,
    /// Identifier from the uploaded price.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub our_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub our_cost: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub median_price: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub max_price: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub min_price: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub average_price: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub count_offers: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub offers: Vec<ReportProductOffer>,
}

/// One page of report results.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportResultsPage {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub products: Vec<ReportProduct>,
}

impl Page for ReportResultsPage {
    type Item = ReportProduct;

    fn total(&self) -> i64 {
        self.total
    }

    fn into_items(self) -> Vec<ReportProduct> {
        self.products
    }
}
