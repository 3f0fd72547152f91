use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;

use launchpad_analytics::cli::Cli;
use launchpad_analytics::config::Config;
use launchpad_analytics::feed::{JsonFileSource, SnapshotCollector};
use launchpad_analytics::ranking::Leaderboard;
use launchpad_analytics::{logging, metrics, units};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match &cli.log_file {
        Some(path) => logging::init(path, level)?,
        None => env_logger::Builder::new().filter_level(level).init(),
    }

    info!("Starting launchpad analytics...");

    let config_path = cli.config.unwrap_or_else(|| "config/config.toml".into());
    let config = match Config::load(&config_path) {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("Failed to load configuration from {:?}: {}", config_path, e);
            return Err(anyhow::anyhow!("Configuration loading failed: {}", e));
        }
    };
    info!("Configuration loaded successfully.");

    if config.monitoring.enable_prometheus {
        metrics::init()?;
        info!(
            "Prometheus registry initialized (port {}).",
            config.monitoring.prometheus_port
        );
    }

    let source = JsonFileSource::new(config.launchpad.events_file.clone());
    let collector = SnapshotCollector::new(source, config.curve, config.launchpad.clone());
    info!(
        "Snapshot collector initialized for launchpad {}.",
        config.launchpad.contract_address
    );

    if cli.once {
        let snapshot = collector.collect().await?;
        print_leaderboard(&snapshot, config.launchpad.top_k);
        return Ok(());
    }

    let mut ticker = interval(Duration::from_secs(config.launchpad.poll_interval_secs));
    loop {
        ticker.tick().await;
        match collector.collect().await {
            Ok(snapshot) => print_leaderboard(&snapshot, config.launchpad.top_k),
            Err(e) => log::error!("Snapshot collection failed: {}", e),
        }
    }
}

fn print_leaderboard(snapshot: &launchpad_analytics::ranking::Snapshot, top_k: usize) {
    let board = Leaderboard::build(snapshot, top_k);
    info!(
        "Snapshot at {} with {} tokens",
        snapshot.captured_at(),
        snapshot.len()
    );
    for (key, view) in &board.views {
        info!("Top {} by {}:", top_k, key.label());
        for (rank, token) in view.iter().enumerate() {
            info!(
                "  #{} {} ({}) - market cap {}, unit price {} TON",
                rank + 1,
                token.name,
                token.symbol,
                token.market_cap,
                units::from_nano(token.unit_price)
            );
        }
    }
}
