//! sysgraph Telegram Bot - Main Entry Point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use sysgraph_bot::report::{format_summary, Reporter};
use sysgraph_common::{init_logging, LoggingConfig, TelegramClient, TelegramConfig};
use sysgraph_config::{Config, ConfigLoader};
use sysgraph_graphs::{HealthFigure, RenderContext};
use sysgraph_metrics::MetricsLoader;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (JSON with `token` and `chatID`)
    #[arg(short, long)]
    config: PathBuf,

    /// Log level, overriding the configuration file
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the input data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the chart output path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = ConfigLoader::load_from_file(&args.config)?;
    if let Some(dir) = args.data_dir.clone() {
        config.data.dir = dir;
    }
    if let Some(output) = args.output.clone() {
        config.graph.output_path = output;
    }

    // Initialize logging
    init_logging(LoggingConfig {
        level: args
            .log_level
            .clone()
            .unwrap_or_else(|| config.logging.level.clone()),
        file_path: config.logging.file.clone(),
        ..LoggingConfig::default()
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    info!("Starting sysgraph report run");

    if let Err(e) = run(&config).await {
        error!("Report run failed: {e}");
        return Err(e.into());
    }

    info!("Report run complete");
    Ok(())
}

/// The report pipeline: load series, render the figure, deliver both
async fn run(config: &Config) -> sysgraph_common::Result<()> {
    let report = MetricsLoader::new(&config.data.dir).load()?;

    let ctx = RenderContext::new(&config.graph.output_path)
        .with_dimensions(config.graph.width, config.graph.height)
        .with_bins(config.graph.bins);
    let figure_path = HealthFigure::new(ctx).render(&report.history)?;

    let text = format_summary(&report.distro, &report.averages);

    // The client lives for the delivery phase only and is dropped on every
    // exit path, success or failure.
    let client = TelegramClient::new(
        TelegramConfig::new(&config.delivery.token)
            .with_api_base(&config.delivery.api_base)
            .with_timeout(config.delivery.timeout_secs),
    )?;
    Reporter::new(&client, &config.delivery.chat_id)
        .deliver(&figure_path, &text)
        .await
}
