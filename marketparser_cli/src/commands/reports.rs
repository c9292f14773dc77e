use anyhow::Result;
use clap::{Args, Subcommand};
use marketparser_api::Client;

use crate::output::{
    print_json, print_report_products_csv, print_report_products_markdown,
    print_report_products_table, print_reports_csv, print_reports_markdown, print_reports_table,
    OutputFormat,
};

#[derive(Args)]
pub struct ReportsArgs {
    #[command(subcommand)]
    pub command: ReportsCommand,
}

#[derive(Subcommand)]
pub enum ReportsCommand {
    /// List the campaign's reports
    List {
        /// Campaign ID
        #[arg(long)]
        campaign_id: i64,
    },
    /// Show a single report
    Show {
        /// Campaign ID
        #[arg(long)]
        campaign_id: i64,

        /// Report ID
        #[arg(long)]
        report_id: i64,
    },
    /// Start a new report for the campaign
    Create {
        /// Campaign ID
        #[arg(long)]
        campaign_id: i64,
    },
    /// List competitor prices found by a finished report
    Results {
        /// Campaign ID
        #[arg(long)]
        campaign_id: i64,

        /// Report ID
        #[arg(long)]
        report_id: i64,
    },
}

pub async fn run(args: &ReportsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        ReportsCommand::List { campaign_id } => {
            let reports = client.get_reports(*campaign_id).await?;
            eprintln!("{} reports for campaign {}", reports.len(), campaign_id);
            match format {
                OutputFormat::Table => print_reports_table(&reports),
                OutputFormat::Json => print_json(&reports),
                OutputFormat::Csv => print_reports_csv(&reports)?,
                OutputFormat::Markdown => print_reports_markdown(&reports),
            }
        }
        ReportsCommand::Show {
            campaign_id,
            report_id,
        } => {
            let report = client.get_report_details(*campaign_id, *report_id).await?;
            match format {
                OutputFormat::Table => print_reports_table(&[report]),
                OutputFormat::Json => print_json(&report),
                OutputFormat::Csv => print_reports_csv(&[report])?,
                OutputFormat::Markdown => print_reports_markdown(&[report]),
            }
        }
        ReportsCommand::Create { campaign_id } => {
            let report_id = client.create_report(*campaign_id).await?;
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({ "id": report_id })),
                _ => println!("{}", report_id),
            }
        }
        ReportsCommand::Results {
            campaign_id,
            report_id,
        } => {
            let products = client.get_report_results(*campaign_id, *report_id).await?;
            eprintln!("{} products in report {}", products.len(), report_id);
            match format {
                OutputFormat::Table => print_report_products_table(&products),
                OutputFormat::Json => print_json(&products),
                OutputFormat::Csv => print_report_products_csv(&products)?,
                OutputFormat::Markdown => print_report_products_markdown(&products),
            }
        }
    }

    Ok(())
}
