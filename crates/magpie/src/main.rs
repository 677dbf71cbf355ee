//! Magpie CLI binary.
//!
//! `magpie run` starts the scheduled posting loop; `magpie run --once`
//! publishes a single post and exits (suitable for cron- or CI-driven
//! operation). Configuration and credentials come from the environment
//! (a `.env` file is honored); a missing credential aborts before any
//! scheduling starts.

use clap::{Parser, Subcommand};
use magpie_bot::{BotConfig, BotServer, ContentGenerator, Orchestrator};
use magpie_models::GeminiClient;
use magpie_social::{XClient, XCredentials};
use tracing::info;

#[derive(Parser)]
#[command(name = "magpie", version, about = "Scheduled AI content bot for X")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the posting bot
    Run {
        /// Generate and publish one post, then exit
        #[arg(long)]
        once: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Fail fast on missing credentials, before any scheduling starts.
    let config = BotConfig::from_env()?;
    let credentials = XCredentials::from_env()?;
    let driver = GeminiClient::from_env(config.model.clone())?;
    let publisher = XClient::new(credentials);

    info!(
        posts_per_day = config.posts_per_day,
        interval_hours = config.post_interval_hours,
        persona = ?config.persona,
        "Magpie initialized"
    );

    let generator = ContentGenerator::new(driver, config.persona);
    let mut orchestrator = Orchestrator::new(config, generator, publisher);

    match cli.command {
        Commands::Run { once: true } => orchestrator.run_single().await,
        Commands::Run { once: false } => BotServer::new(orchestrator).run().await,
    }

    Ok(())
}
