//! Advertising campaigns, the top-level resource every other endpoint hangs off.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::pagination::Page;

/// Numeric campaign identifier. Valid identifiers start at 1.
pub type CampaignID = i64;

/// A campaign returned by `/campaigns.json`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Campaign {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: CampaignID,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: DateTime<Utc>,
    /// Whether the uploaded price is ready for report creation.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ready_to_create_reports: bool,
}

/// One page of the campaign listing.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CampaignsPage {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub campaigns: Vec<Campaign>,
}

impl Page for CampaignsPage {
    type Item = Campaign;

    fn total(&self) -> i64 {
        self.total
    }

    fn into_items(self) -> Vec<Campaign> {
        self.campaigns
    }
}
