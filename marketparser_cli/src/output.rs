use anyhow::Result;
use chrono::{DateTime, Utc};
use marketparser_api::types::{Campaign, PriceDetails, Report, ReportProduct};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct CampaignRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created_at: String,
    #[tabled(rename = "Ready")]
    #[serde(rename = "Ready")]
    ready: String,
}

#[derive(Tabled, Serialize)]
struct PriceDetailsRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created_at: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Rows")]
    #[serde(rename = "Rows")]
    rows: i64,
    #[tabled(rename = "Duplicates")]
    #[serde(rename = "Duplicates")]
    duplicates: i64,
    #[tabled(rename = "Processed")]
    #[serde(rename = "Processed")]
    processed: String,
}

#[derive(Tabled, Serialize)]
struct ReportRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created_at: String,
    #[tabled(rename = "Finished")]
    #[serde(rename = "Finished")]
    finished_at: String,
    #[tabled(rename = "OK")]
    #[serde(rename = "OK")]
    ok_products: i64,
    #[tabled(rename = "Errors")]
    #[serde(rename = "Errors")]
    error_products: i64,
}

#[derive(Tabled, Serialize)]
struct ReportProductRow {
    #[tabled(rename = "Our ID")]
    #[serde(rename = "Our ID")]
    our_id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Region")]
    #[serde(rename = "Region")]
    region: String,
    #[tabled(rename = "Our Cost")]
    #[serde(rename = "Our Cost")]
    our_cost: i64,
    #[tabled(rename = "Min")]
    #[serde(rename = "Min")]
    min_price: i64,
    #[tabled(rename = "Median")]
    #[serde(rename = "Median")]
    median_price: i64,
    #[tabled(rename = "Max")]
    #[serde(rename = "Max")]
    max_price: i64,
    #[tabled(rename = "Offers")]
    #[serde(rename = "Offers")]
    offers: i64,
    #[tabled(rename = "Position")]
    #[serde(rename = "Position")]
    position: String,
}

// -- Row builders --

fn build_campaign_rows(campaigns: &[Campaign]) -> Vec<CampaignRow> {
    campaigns
        .iter()
        .map(|c| CampaignRow {
            id: c.id,
            name: c.name.clone(),
            created_at: format_time(&c.created_at),
            ready: yes_no(c.ready_to_create_reports),
        })
        .collect()
}

fn build_price_details_rows(details: &[PriceDetails]) -> Vec<PriceDetailsRow> {
    details
        .iter()
        .map(|d| PriceDetailsRow {
            id: d.id,
            created_at: format_time(&d.created_at),
            status: d.status.to_string(),
            rows: d.count_not_empty_rows,
            duplicates: d.count_found_duplicated_rows,
            processed: yes_no(d.is_successfully_processed),
        })
        .collect()
}

fn build_report_rows(reports: &[Report]) -> Vec<ReportRow> {
    reports
        .iter()
        .map(|r| ReportRow {
            id: r.id,
            status: r.status.to_string(),
            created_at: format_time(&r.created_at),
            finished_at: r.finished_at.as_ref().map(format_time).unwrap_or_default(),
            ok_products: r.count_ok_products,
            error_products: r.count_error_products,
        })
        .collect()
}

fn build_report_product_rows(products: &[ReportProduct]) -> Vec<ReportProductRow> {
    products
        .iter()
        .map(|p| ReportProductRow {
            our_id: p.our_id.clone(),
            name: p.name.clone(),
            region: p.yandex_region_name.clone(),
            our_cost: p.our_cost,
            min_price: p.min_price,
            median_price: p.median_price,
            max_price: p.max_price,
            offers: p.count_offers,
            position: price_position(p),
        })
        .collect()
}

// -- Table output --

pub fn print_campaigns_table(campaigns: &[Campaign]) {
    println!("{}", Table::new(build_campaign_rows(campaigns)));
}

pub fn print_price_details_table(details: &[PriceDetails]) {
    println!("{}", Table::new(build_price_details_rows(details)));
}

pub fn print_reports_table(reports: &[Report]) {
    println!("{}", Table::new(build_report_rows(reports)));
}

pub fn print_report_products_table(products: &[ReportProduct]) {
    println!("{}", Table::new(build_report_product_rows(products)));
}

// -- Markdown output --

pub fn print_campaigns_markdown(campaigns: &[Campaign]) {
    let mut table = Table::new(build_campaign_rows(campaigns));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_price_details_markdown(details: &[PriceDetails]) {
    let mut table = Table::new(build_price_details_rows(details));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_reports_markdown(reports: &[Report]) {
    let mut table = Table::new(build_report_rows(reports));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_report_products_markdown(products: &[ReportProduct]) {
    let mut table = Table::new(build_report_product_rows(products));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

fn write_csv<R: Serialize>(rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_campaigns_csv(campaigns: &[Campaign]) -> Result<()> {
    write_csv(build_campaign_rows(campaigns))
}

pub fn print_price_details_csv(details: &[PriceDetails]) -> Result<()> {
    write_csv(build_price_details_rows(details))
}

pub fn print_reports_csv(reports: &[Report]) -> Result<()> {
    write_csv(build_report_rows(reports))
}

pub fn print_report_products_csv(products: &[ReportProduct]) -> Result<()> {
    write_csv(build_report_product_rows(products))
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_time(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M").to_string()
}

fn yes_no(flag: bool) -> String {
    let s = if flag { "yes" } else { "no" };
    s.to_string()
}

/// Where our cost sits relative to the competitor range.
fn price_position(p: &ReportProduct) -> String {
    if p.count_offers == 0 {
        "no offers".to_string()
    } else if p.our_cost < p.min_price {
        "cheapest".to_string()
    } else if p.our_cost > p.max_price {
        "above max".to_string()
    } else if p.our_cost <= p.median_price {
        "below median".to_string()
    } else {
        "above median".to_string()
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
