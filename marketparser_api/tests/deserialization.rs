use marketparser_api::types::{
    CampaignsPage, ErrorEnvelope, PriceDetails, PriceStatus, ReportResultsPage, ReportStatus,
    ReportsPage, Response,
};
use marketparser_api::Page;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_campaigns() {
    let json = load_fixture("campaigns.json");
    let resp: Response<CampaignsPage> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.response.total(), 2);

    let campaigns = resp.response.into_items();
    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns[0].id, 101);
    assert_eq!(campaigns[0].name, "Electronics");
    assert!(campaigns[0].ready_to_create_reports);
    assert_eq!(
        campaigns[0].created_at.to_rfc3339(),
        "2017-03-14T06:12:44+00:00"
    );
    assert!(!campaigns[1].ready_to_create_reports);
}

#[test]
fn deserialize_price_details() {
    let json = load_fixture("price_details.json");
    let resp: Response<PriceDetails> = serde_json::from_str(&json).unwrap();
    let details = resp.response;
    assert_eq!(details.id, 5531);
    assert_eq!(details.status, PriceStatus::Processed);
    assert_eq!(details.count_not_empty_rows, 240);
    assert_eq!(details.count_found_duplicated_rows, 3);
    assert!(details.is_successfully_processed);
}

#[test]
fn deserialize_reports() {
    let json = load_fixture("reports.json");
    let resp: Response<ReportsPage> = serde_json::from_str(&json).unwrap();
    let reports = resp.response.reports;
    assert_eq!(reports.len(), 2);

    let done = &reports[0];
    assert_eq!(done.id, 9001);
    assert_eq!(done.status, ReportStatus::Ok);
    assert!(done.is_ready());
    assert!(done.finished_at.is_some());
    assert_eq!(done.count_ok_products, 238);

    let running = &reports[1];
    assert_eq!(running.status, ReportStatus::InProgress);
    assert!(!running.is_ready());
    assert!(running.started_at.is_some());
    assert!(running.finished_at.is_none());
}

#[test]
fn deserialize_report_results() {
    let json = load_fixture("report_results.json");
    let resp: Response<ReportResultsPage> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.response.total, 1);

    let product = &resp.response.products[0];
    assert_eq!(product.our_id, "product-1");
    assert_eq!(product.yandex_model_id, 11929063);
    assert_eq!(product.yandex_region_name, "Moscow");
    assert_eq!(product.min_price, 1100);
    assert_eq!(product.count_offers, 2);
    assert_eq!(product.offers.len(), 2);
    assert_eq!(product.offers[0].shop_name, "Shop One");
    assert!(product.offers[1].pickup);
}

#[test]
fn deserialize_error_envelope() {
    let json = load_fixture("error_not_found.json");
    let err: ErrorEnvelope = serde_json::from_str(&json).unwrap();
    assert_eq!(err.code, 4);
    assert_eq!(err.message, "not found");
}

#[test]
fn missing_fields_take_defaults() {
    let json = r#"{"response": {"campaigns": [{"id": 7}]}}"#;
    let resp: Response<CampaignsPage> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.response.total, 0);
    assert_eq!(resp.response.campaigns[0].id, 7);
    assert_eq!(resp.response.campaigns[0].name, "");
    assert!(!resp.response.campaigns[0].ready_to_create_reports);
}

#[test]
fn unknown_report_status_is_tolerated() {
    let json = r#"{"response": {"id": 1, "status": "ARCHIVED"}}"#;
    let resp: Response<marketparser_api::types::Report> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.response.status, ReportStatus::Unknown);
}

#[test]
fn missing_response_wrapper_returns_error() {
    let json = r#"{"total": 1, "campaigns": []}"#;
    let result = serde_json::from_str::<Response<CampaignsPage>>(json);
    assert!(result.is_err());
}

#[test]
fn null_fields_take_defaults() {
    let json = load_fixture("report_results_nulls.json");
    let resp: Response<ReportResultsPage> = serde_json::from_str(&json).unwrap();
    let products = resp.response.products;
    assert_eq!(products.len(), 2);

    assert_eq!(products[0].our_id, "1");
    assert_eq!(products[0].yandex_model_id, 0);
    assert_eq!(products[0].yandex_region_name, "");
    assert_eq!(products[0].median_price, 0);
    assert!(products[0].offers.is_empty());

    assert_eq!(products[1].name, "");
    assert_eq!(products[1].offers[0].shop_name, "");
    assert_eq!(products[1].offers[0].price, 990);
    assert!(!products[1].offers[0].in_stock);
    assert_eq!(products[1].offers[0].link_to_offer, "");
}

#[test]
fn null_campaign_and_report_fields_take_defaults() {
    let json = r#"{"response": {"total": null, "campaigns": [{"id": 1, "name": null, "createdAt": null}]}}"#;
    let resp: Response<CampaignsPage> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.response.total, 0);
    assert_eq!(resp.response.campaigns[0].name, "");

    let json = r#"{"response": {"id": 3, "status": null, "countOkProducts": null, "finishedAt": null}}"#;
    let resp: Response<marketparser_api::types::Report> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.response.status, ReportStatus::Unknown);
    assert_eq!(resp.response.count_ok_products, 0);
    assert!(resp.response.finished_at.is_none());

    let json = r#"{"response": {"id": 5, "status": null, "isSuccessfullyProcessed": null}}"#;
    let resp: Response<PriceDetails> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.response.status, PriceStatus::Unknown);
    assert!(!resp.response.is_successfully_processed);
}
