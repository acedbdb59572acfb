use crate::config::cli::{Args, Commands};
use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::{FfhbClient, FileSystemStore};
use crate::services::{MatchService, ScrapingService};
use chrono::Local;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the JSON document, logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(args.log_level()?)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new(args)?;
    config.log_summary();

    let scraping = ScrapingService::new(
        FfhbClient::new(config.http_client.clone()),
        &config.scraper_config,
    )?;
    let service = MatchService::new(
        config.scraper_config.clone(),
        scraping,
        Arc::new(FileSystemStore::new()),
        config.args.output.clone(),
    );

    let document = match config.args.subcommand() {
        Commands::Matches { next } => service.matches(next).await?,
        Commands::NextWeekend => service.next_weekend(Local::now().date_naive()).await?,
        Commands::Teams => service.teams()?,
    };
    service.emit(&document)?;

    info!("Scraping completed successfully!");
    Ok(())
}
