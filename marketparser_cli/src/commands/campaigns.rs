use anyhow::Result;
use marketparser_api::Client;

use crate::output::{
    print_campaigns_csv, print_campaigns_markdown, print_campaigns_table, print_json, OutputFormat,
};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let campaigns = client.get_campaigns().await?;

    eprintln!("{} campaigns", campaigns.len());

    match format {
        OutputFormat::Table => print_campaigns_table(&campaigns),
        OutputFormat::Json => print_json(&campaigns),
        OutputFormat::Csv => print_campaigns_csv(&campaigns)?,
        OutputFormat::Markdown => print_campaigns_markdown(&campaigns),
    }

    Ok(())
}
