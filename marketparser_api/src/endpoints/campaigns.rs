use crate::types::{Campaign, CampaignsPage};
use crate::{Client, Error};

impl Client {
    /// Fetches every campaign on the account.
    pub async fn get_campaigns(&self) -> Result<Vec<Campaign>, Error> {
        self.paginate::<CampaignsPage>("/campaigns.json").await
    }
}
