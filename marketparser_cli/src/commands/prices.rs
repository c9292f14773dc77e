use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use marketparser_api::types::PriceProduct;
use marketparser_api::Client;

use crate::output::{
    print_json, print_price_details_csv, print_price_details_markdown, print_price_details_table,
    OutputFormat,
};

#[derive(Args)]
pub struct PriceArgs {
    #[command(subcommand)]
    pub command: PriceCommand,
}

#[derive(Subcommand)]
pub enum PriceCommand {
    /// Show the processing status of the campaign's price
    Status {
        /// Campaign ID
        #[arg(long)]
        campaign_id: i64,
    },
    /// Upload products from a JSON file (an array of {"id", "name", "cost", "yandex_model_id", "custom"})
    Update {
        /// Campaign ID
        #[arg(long)]
        campaign_id: i64,

        /// Path to the JSON products file
        #[arg(long)]
        file: PathBuf,
    },
}

pub(crate) fn load_products(raw: &str) -> Result<Vec<PriceProduct>> {
    let products: Vec<PriceProduct> =
        serde_json::from_str(raw).context("products file must be a JSON array of products")?;
    Ok(products)
}

pub async fn run(args: &PriceArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        PriceCommand::Status { campaign_id } => {
            let details = client.get_price_details(*campaign_id).await?;
            match format {
                OutputFormat::Table => print_price_details_table(&[details]),
                OutputFormat::Json => print_json(&details),
                OutputFormat::Csv => print_price_details_csv(&[details])?,
                OutputFormat::Markdown => print_price_details_markdown(&[details]),
            }
        }
        PriceCommand::Update { campaign_id, file } => {
            let raw = std::fs::read_to_string(file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let products = load_products(&raw)?;
            client.update_price(*campaign_id, &products).await?;
            eprintln!(
                "Uploaded {} products to campaign {}",
                products.len(),
                campaign_id
            );
        }
    }

    Ok(())
}
