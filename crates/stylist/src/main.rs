//! Stylist CLI - style-match analysis of product images via multimodal LLMs.
//!
//! Sends product images and a free-text style profile to a cloud or local
//! vision model and prints whether the item matches the user's style.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a product from two angles
//! stylist analyze https://shop.example/front.jpg https://shop.example/back.jpg \
//!     --profile "Muted colors, tailored blazers, no sportswear."
//!
//! # Use a local model with on-disk photos, JSON output
//! stylist analyze ./front.jpg --profile-file ~/style.txt \
//!     --provider local-model --endpoint http://localhost:11434/api/generate --model llava \
//!     --format json
//!
//! # View configuration
//! stylist config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Stylist - does this product match your style?
#[derive(Parser, Debug)]
#[command(name = "stylist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze product images against a style profile
    Analyze(cli::analyze::AnalyzeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match stylist_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `stylist config path`."
            );
            stylist_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Stylist v{}", stylist_core::VERSION);

    match cli.command {
        Commands::Analyze(args) => cli::analyze::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
