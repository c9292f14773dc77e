//! Price catalog upload and processing status.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// A product line in an uploaded price catalog.
///
/// Only `id` is required; unset optional fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceProduct {
    /// Seller-side product identifier.
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Seller's own price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,

    /// Yandex.Market model the product maps to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yandex_model_id: Option<i64>,

    /// Free-form extra columns.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, String>,
}

impl PriceProduct {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_yandex_model_id(mut self, model_id: i64) -> Self {
        self.yandex_model_id = Some(model_id);
        self
    }

    pub fn with_custom(mut self, key: &str, value: &str) -> Self {
        self.custom.insert(key.to_string(), value.to_string());
        self
    }
}

/// Request body for a price upload.
#[derive(Debug, Serialize)]
pub struct PriceUpdate<'a> {
    pub products: &'a [PriceProduct],
}

/// Payload of the price upload response.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PriceUpdateResult {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub success: bool,
}

/// Processing state of the most recently uploaded price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceStatus {
    Error,
    /// Rows were read; matching has not started.
    Parsed,
    ReadyToBeParsed,
    SearchInProgress,
    /// All processing for the price is done.
    Processed,
    NotEnoughBalanceToProcess,
    /// A status this client does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for PriceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PriceStatus::Error => "ERROR",
                PriceStatus::Parsed => "PARSED",
                PriceStatus::ReadyToBeParsed => "READY_TO_BE_PARSED",
                PriceStatus::SearchInProgress => "SEARCH_IN_PROGRESS",
                PriceStatus::Processed => "PROCESSED",
                PriceStatus::NotEnoughBalanceToProcess => "NOT_ENOUGH_BALANCE_TO_PROCESS",
                PriceStatus::Unknown => "UNKNOWN",
            }
        )
    }
}

/// Details of the price attached to a campaign.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceDetails {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: DateTime<Utc>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: PriceStatus,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub count_not_empty_rows: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub count_found_duplicated_rows: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_successfully_processed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_optionals_are_omitted() {
        let products = [PriceProduct::new("sku-1")];
        let body = serde_json::to_value(PriceUpdate {
            products: &products,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"products": [{"id": "sku-1"}]}));
    }

    #[test]
    fn full_product_uses_wire_names() {
        let product = PriceProduct::new("sku-2")
            .with_name("Phone")
            .with_cost(4321)
            .with_yandex_model_id(11929061)
            .with_custom("color", "black");
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["yandex_model_id"], 11929061);
        assert_eq!(value["cost"], 4321);
        assert_eq!(value["custom"]["color"], "black");
    }

    #[test]
    fn unknown_status_is_tolerated() {
        let status: PriceStatus = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(status, PriceStatus::Unknown);
        let status: PriceStatus =
            serde_json::from_str("\"NOT_ENOUGH_BALANCE_TO_PROCESS\"").unwrap();
        assert_eq!(status, PriceStatus::NotEnoughBalanceToProcess);
        assert_eq!(status.to_string(), "NOT_ENOUGH_BALANCE_TO_PROCESS");
    }
}
