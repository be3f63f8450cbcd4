//! Memecoin Alert Bot
//!
//! Polls a token feed, screens each record against risk and safety-check
//! thresholds, and pushes Markdown alerts to a Telegram recipient.

mod config;
mod poller;

use clap::Parser;
use config::AppConfig;
use memewatch_alerts::{Notifier, TelegramSink};
use memewatch_feeds::{DexScreenerFeed, SimulatedFeed, TokenFeed};
use memewatch_screener::AlertScreener;
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Memecoin Alert Bot CLI
#[derive(Parser, Debug)]
#[command(name = "memewatch")]
#[command(about = "Telegram alert bot for memecoin signals", long_about = None)]
struct Args {
    /// Minimum risk score to alert on
    #[arg(short = 'r', long, default_value_t = 70)]
    min_risk_score: u8,

    /// Seconds between polling cycles
    #[arg(long, default_value_t = 300)]
    poll_interval: u64,

    /// Seconds to wait before retrying after a failed cycle
    #[arg(long, default_value_t = 60)]
    retry_interval: u64,

    /// Use the live DexScreener feed instead of the simulator
    #[arg(long, default_value_t = false)]
    live: bool,

    /// Chain to watch in live mode
    #[arg(long, default_value = "solana")]
    chain: String,

    /// Search query for the live feed
    #[arg(long, default_value = "meme")]
    query: String,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    let level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() {
    // Load .env before reading credentials
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    // CLI overrides, applied before the config is handed to the loop
    config.screener.risk_score_threshold = args.min_risk_score;
    config.poll_interval = Duration::from_secs(args.poll_interval);
    config.retry_interval = Duration::from_secs(args.retry_interval);

    let sink = match TelegramSink::new(&config.telegram.token, &config.telegram.user_id) {
        Ok(sink) => sink,
        Err(e) => {
            error!(error = %e, "Invalid Telegram recipient");
            std::process::exit(1);
        }
    };
    let notifier = Notifier::new(sink);

    let screener = AlertScreener::new(config.screener.clone());

    let feed: Box<dyn TokenFeed> = if args.live {
        info!(chain = %args.chain, query = %args.query, "Using live DexScreener feed");
        Box::new(DexScreenerFeed::new(&args.chain, &args.query))
    } else {
        info!("Using simulated feed (pass --live for real market data)");
        Box::new(SimulatedFeed::new())
    };

    poller::run(
        feed,
        screener,
        notifier,
        config.poll_interval,
        config.retry_interval,
    )
    .await;
}
