use crate::pagination::FIRST_PAGE;
use crate::types::{
    CampaignID, CreatedReport, Report, ReportID, ReportProduct, ReportResultsPage, ReportsPage,
    Response,
};
use crate::{Client, Error};

use super::{require_campaign_id, require_report_ids};

impl Client {
    /// Fetches every report of the campaign.
    pub async fn get_reports(&self, campaign_id: CampaignID) -> Result<Vec<Report>, Error> {
        require_campaign_id(campaign_id)?;
        self.paginate::<ReportsPage>(&format!("/campaigns/{}/reports.json", campaign_id))
            .await
    }

    /// Fetches a single report.
    pub async fn get_report_details(
        &self,
        campaign_id: CampaignID,
        report_id: ReportID,
    ) -> Result<Report, Error> {
        require_report_ids(campaign_id, report_id)?;
        let resp: Response<Report> = self
            .get(
                &format!("/campaigns/{}/reports/{}.json", campaign_id, report_id),
                FIRST_PAGE,
            )
            .await?;
        Ok(resp.response)
    }

    /// Starts a new report for the campaign and returns its ID.
    pub async fn create_report(&self, campaign_id: CampaignID) -> Result<ReportID, Error> {
        require_campaign_id(campaign_id)?;
        let resp: Response<CreatedReport> = self
            .post(&format!("/campaigns/{}/reports.json", campaign_id), None)
            .await?;
        Ok(resp.response.id)
    }

    /// Fetches every product row of a finished report.
    pub async fn get_report_results(
        &self,
        campaign_id: CampaignID,
        report_id: ReportID,
    ) -> Result<Vec<ReportProduct>, Error> {
        require_report_ids(campaign_id, report_id)?;
        self.paginate::<ReportResultsPage>(&format!(
            "/campaigns/{}/reports/{}/results.json",
            campaign_id, report_id
        ))
        .await
    }
}
