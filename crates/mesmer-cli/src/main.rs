//! Mesmer CLI - hypnotic artwork generation agent
//!
//! Usage:
//!   mesmer run              Generate until interrupted
//!   mesmer run -n 5         Generate five artworks
//!   mesmer once             Generate a single test artwork

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use mesmer_agent::DeepSeekClient;
use mesmer_gallery::FsGallery;
use mesmer_market::Marketplace;
use mesmer_studio::{Generator, SessionLoop};
use std::sync::atomic::Ordering;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "mesmer")]
#[command(author, version, about = "Hypnotic animated artwork generation agent")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Skip launching the companion marketplace
    #[arg(long)]
    no_market: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate artworks continuously or a fixed number of times
    Run {
        /// Number of artworks to generate (omit to run until interrupted)
        #[arg(short = 'n', long)]
        count: Option<u64>,
    },

    /// Generate a single test artwork
    Once,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env()?;

    let count = match cli.command {
        Commands::Run { count } => count,
        Commands::Once => Some(1),
    };

    // The marketplace is a companion, not a dependency: a failed launch
    // is reported and the session proceeds without it.
    let market = if cli.no_market {
        None
    } else {
        match Marketplace::launch(&config.market_command, &config.market_url).await {
            Ok(market) => {
                println!("Marketplace running at {}", market.url());
                Some(market)
            }
            Err(e) => {
                warn!("Continuing without marketplace: {}", e);
                None
            }
        }
    };

    let client = DeepSeekClient::new(config.api_url.clone(), config.model.clone());
    let generator = Generator::new(client);
    let store = FsGallery::new(&config.gallery_dir);
    let mut session = SessionLoop::new(generator, store);

    // Ctrl-C requests a clean stop between iterations; an in-flight
    // generation runs to completion first.
    let cancel = session.cancel_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, finishing current artwork");
            cancel.store(true, Ordering::SeqCst);
        }
    });

    let result = session.run(count).await;
    let summary = session.summary();

    println!();
    println!("Session summary");
    println!("===============");
    println!("Artworks generated: {}", summary.generated);
    println!("Total cost: ${:.2}", summary.total_cost);
    println!("Average cost: ${:.2}", summary.average_cost);

    if let Some(market) = market {
        market.shutdown().await;
    }

    result?;
    Ok(())
}
