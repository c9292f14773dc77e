use crate::pagination::FIRST_PAGE;
use crate::types::{
    CampaignID, PriceDetails, PriceProduct, PriceUpdate, PriceUpdateResult, Response,
};
use crate::{Client, Error};

use super::require_campaign_id;

impl Client {
    /// Uploads a price catalog for the campaign.
    ///
    /// Requires at least one product. Returns [`Error::PriceUpdateRejected`]
    /// when the service answers `success: false`.
    pub async fn update_price(
        &self,
        campaign_id: CampaignID,
        products: &[PriceProduct],
    ) -> Result<(), Error> {
        require_campaign_id(campaign_id)?;
        if products.is_empty() {
            return Err(Error::Validation(
                "at least one product must be passed".to_string(),
            ));
        }

        let body = serde_json::to_vec(&PriceUpdate { products }).map_err(Error::Encode)?;
        let resp: Response<PriceUpdateResult> = self
            .post(&format!("/campaigns/{}/price.json", campaign_id), Some(body))
            .await?;

        if !resp.response.success {
            tracing::error!("Price update for campaign {} was not accepted", campaign_id);
            return Err(Error::PriceUpdateRejected);
        }
        Ok(())
    }

    /// Fetches the processing state of the campaign's current price.
    pub async fn get_price_details(&self, campaign_id: CampaignID) -> Result<PriceDetails, Error> {
        require_campaign_id(campaign_id)?;
        let resp: Response<PriceDetails> = self
            .get(&format!("/campaigns/{}/price.json", campaign_id), FIRST_PAGE)
            .await?;
        Ok(resp.response)
    }
}
