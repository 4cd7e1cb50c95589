//! `oden` binary: the composition root.
//!
//! Loads `.env`, reads [`AppConfig`] from the environment, sets up logging,
//! loads the content directory into a [`Runtime`] and runs one scripted
//! command, printing JSON to stdout.

mod commands;
mod config;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_content::ContentFactory;
use game_core::state::HeroTypeId;
use runtime::{Runtime, RuntimeConfig};

use commands::Starter;
use config::AppConfig;

/// Gacha and stage battle engine sandbox
#[derive(Parser)]
#[command(name = "oden")]
#[command(about = "Run summons and battles against shipped content", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a short session touching every service
    Demo,

    /// Show a banner's published odds
    Rates {
        #[arg(long, default_value = "dragon_festival")]
        banner: String,
    },

    /// Summon on a banner
    Summon {
        #[arg(long, default_value = "dragon_festival")]
        banner: String,
        /// single, ten (multi) or daily_free (free)
        #[arg(long, default_value = "single")]
        kind: String,
        #[arg(long, default_value_t = 1)]
        times: u32,
        #[arg(long, default_value_t = 20_000)]
        gold: u64,
        #[arg(long, default_value_t = 2_000)]
        gems: u64,
    },

    /// Fight a stage with a starter roster
    Battle {
        #[arg(long, default_value = "forest-1")]
        stage: String,
        /// Comma separated hero types, fielded in order
        #[arg(long, value_delimiter = ',', default_value = "knight,archer")]
        heroes: Vec<String>,
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    let _guard = logging::setup_logging(&config.log_dir)?;

    let bundle = ContentFactory::new(config.data_dir.clone())
        .load_bundle()
        .with_context(|| format!("loading content from {}", config.data_dir.display()))?;
    tracing::info!(
        data = %config.data_dir.display(),
        banners = bundle.banners.len(),
        stages = bundle.stages.len(),
        "content loaded"
    );

    let rt = Runtime::builder()
        .config(RuntimeConfig {
            rng_seed: config.seed,
            ..RuntimeConfig::default()
        })
        .content(bundle)
        .build()?;

    match cli.command {
        Command::Demo => commands::demo(&rt, &config.user).await,
        Command::Rates { banner } => commands::rates(&rt, &config.user, &banner).await,
        Command::Summon {
            banner,
            kind,
            times,
            gold,
            gems,
        } => {
            let starter = Starter {
                gold,
                gems,
                ..Starter::default()
            };
            commands::summon(&rt, &config.user, &starter, &banner, &kind, times).await
        }
        Command::Battle {
            stage,
            heroes,
            times,
        } => {
            let starter = Starter {
                heroes: heroes.into_iter().map(HeroTypeId::from).collect(),
                ..Starter::default()
            };
            commands::battle(&rt, &config.user, &starter, &stage, times).await
        }
    }
}
