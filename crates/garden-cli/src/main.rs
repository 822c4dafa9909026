//! Garden planner CLI
//!
//! Command-line interface over `garden-core`: planting calendars, forecasts
//! and the locally stored garden.

mod args;
mod cli;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use garden_core::PlannerBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_url,
        timeout_secs,
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_api_url(api_url)
        .with_timeout(Duration::from_secs(timeout_secs))
        .with_database_path(database_file)
        .with_default_database()
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer);

    info!("Garden planner started");

    match command {
        Some(Crops(args)) => cli.crops(&args).await,
        Some(Weather(args)) => cli.weather(&args).await,
        Some(Add(args)) => cli.add(&args).await,
        Some(Status(args)) => cli.status(args).await,
        Some(Advance(args)) => cli.advance(args).await,
        Some(Remove(args)) => cli.remove(args).await,
        Some(Export(args)) => cli.export(args),
        Some(Import(args)) => cli.import(&args).await,
        Some(Tip) => cli.tip(),
        Some(List) | None => cli.list(),
    }
}
