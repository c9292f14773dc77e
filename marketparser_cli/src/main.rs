mod commands;
mod output;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use marketparser_api::{Client, Pagination, StdoutLogger};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "marketparser")]
#[command(about = "Manage MarketParser campaigns, prices and competitor reports")]
struct Cli {
    /// API key (falls back to MARKETPARSER_API_KEY, also read from .env)
    #[arg(long, env = "MARKETPARSER_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Print every request and response status to stdout
    #[arg(long, global = true)]
    debug: bool,

    /// Stop list commands after this many pages
    #[arg(long, global = true)]
    max_pages: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List campaigns
    Campaigns,
    /// Upload a price or show its processing status
    Price(commands::prices::PriceArgs),
    /// List, create or inspect reports
    Reports(commands::reports::ReportsArgs),
}

fn build_client(cli: &Cli) -> Result<Client> {
    let api_key = cli
        .api_key
        .as_deref()
        .context("missing API key: pass --api-key or set MARKETPARSER_API_KEY")?;

    let mut pagination = Pagination::default();
    if let Some(max_pages) = cli.max_pages {
        pagination = pagination.with_max_pages(max_pages);
    }

    let mut client = Client::new(api_key)?.with_pagination(pagination);
    if cli.debug {
        client = client.with_debug_logger(Arc::new(StdoutLogger::new()));
    }
    Ok(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marketparser=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = build_client(&cli)?;

    match &cli.command {
        Commands::Campaigns => commands::campaigns::run(&client, &format).await?,
        Commands::Price(args) => commands::prices::run(args, &client, &format).await?,
        Commands::Reports(args) => commands::reports::run(args, &client, &format).await?,
    }

    Ok(())
}
