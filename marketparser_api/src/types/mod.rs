mod envelope;
pub use self::envelope::{ErrorEnvelope, Response};

mod campaign;
pub use self::campaign::{Campaign, CampaignID, CampaignsPage};

mod price;
pub use self::price::{PriceDetails, PriceProduct, PriceStatus, PriceUpdate, PriceUpdateResult};

mod report;
pub use self::report::{
    CreatedReport, Report, ReportID, ReportProduct, ReportProductOffer, ReportResultsPage,
    ReportStatus, ReportsPage,
};
