//! Endpoint wrappers: one `impl Client` block per resource.

mod campaigns;
mod prices;
mod reports;

use crate::Error;

fn require_campaign_id(campaign_id: i64) -> Result<(), Error> {
    if campaign_id < 1 {
        return Err(Error::Validation(format!(
            "passed empty campaign ID: {}",
            campaign_id
        )));
    }
    Ok(())
}

fn require_report_ids(campaign_id: i64, report_id: i64) -> Result<(), Error> {
    if campaign_id < 1 || report_id < 1 {
        return Err(Error::Validation(format!(
            "either campaign ID ({}) or report ID ({}) is empty",
            campaign_id, report_id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_id_must_be_positive() {
        assert!(require_campaign_id(1).is_ok());
        assert!(matches!(require_campaign_id(0), Err(Error::Validation(_))));
        assert!(matches!(require_campaign_id(-3), Err(Error::Validation(_))));
    }

    #[test]
    fn both_report_ids_must_be_positive() {
        assert!(require_report_ids(1, 1).is_ok());
        assert!(require_report_ids(0, 1).is_err());
        assert!(require_report_ids(1, 0).is_err());
    }
}
