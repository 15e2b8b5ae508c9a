//! Headless Tetrissy runner (default binary).
//!
//! Runs one session with the autoplay player feeding commands, logs the session through
//! `tracing`, and prints the final snapshot as JSON on stdout.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use tetrissy::core::GameState;
use tetrissy::engine::{Autoplay, DriverConfig, LogFeedback, Session};
use tetrissy::types::GameMode;

#[derive(Debug, Parser)]
#[command(name = "tetrissy", about = "Falling-block puzzle engine, played by a random autoplayer")]
struct Cli {
    /// classic, marathon, sprint, zen or chaos
    #[arg(long)]
    mode: Option<String>,

    /// Seed for the piece randomizer and the autoplayer
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between autoplay commands
    #[arg(long)]
    autoplay_ms: Option<u64>,

    /// Stop after this many milliseconds
    #[arg(long)]
    duration_ms: Option<u64>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Command line values win over the environment
    fn into_config(self) -> Result<DriverConfig> {
        let mut config = DriverConfig::from_env();
        if let Some(mode) = self.mode.as_deref() {
            config.mode = GameMode::from_str(mode).ok_or_else(|| anyhow!("unknown mode: {mode}"))?;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(ms) = self.autoplay_ms {
            config.autoplay_interval_ms = ms.max(1);
        }
        if let Some(ms) = self.duration_ms {
            config.max_duration_ms = ms;
        }
        Ok(config)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(level)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.into_config()?;

    info!(
        mode = config.mode.display_name(),
        seed = config.seed,
        autoplay_ms = config.autoplay_interval_ms,
        duration_ms = config.max_duration_ms,
        "starting"
    );

    let session = Session::spawn(GameState::new(config.mode, config.seed), LogFeedback);
    let autoplay = Autoplay::new(
        StdRng::seed_from_u64(config.seed),
        Duration::from_millis(config.autoplay_interval_ms),
        Duration::from_millis(config.max_duration_ms),
    );
    let (reason, sent) = autoplay
        .run(session.commands.clone(), session.snapshots.clone())
        .await;
    info!(?reason, commands = sent, "autoplay finished");

    let last = session.finish().await.context("session task failed")?;
    println!("{}", serde_json::to_string_pretty(&last)?);
    Ok(())
}
