//! Interactive sentiment analysis of tweets
//!
//! Usage:
//! ```bash
//! cargo run
//! cargo run -- --output results.txt --no-pause
//! cargo run -- --config config.toml --log-level debug
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use tweet_sentiment::{load_config, AppConfig, Menu};

#[derive(Parser)]
#[command(name = "tweet_sentiment")]
#[command(version = "0.1.0")]
#[command(about = "Sentiment analysis of tweets", long_about = None)]
struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Export file, overrides the configured path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not wait for Enter after each chart
    #[arg(long)]
    no_pause: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(output) = cli.output {
        config.export.path = output;
    }
    if cli.no_pause {
        config.chart.pause = false;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    let log_level = match config.logging.level.as_str() {
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so they stay out of the interactive text
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(export = %config.export.path.display(), "starting");

    let menu = Menu::from_config(&config);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    menu.run(&mut input, &mut out)?;

    Ok(())
}
