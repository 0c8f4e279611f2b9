//! The `stylist config` command.

use clap::{Args, Subcommand};
use std::fmt::Write as _;
use stylist_core::llm::resolve_env_var;
use stylist_core::{Config, ImageStylist};

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the configuration and the provider settings it resolves to
    Show,

    /// Print the config file path
    Path,

    /// Check that the configuration can build a client (no network call)
    Check,

    /// Write a config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            print!("{}", config.to_toml()?);
            print!("\n{}", resolved_summary(&config));
        }

        ConfigCommand::Path => {
            println!("{}", Config::default_path().display());
        }

        ConfigCommand::Check => {
            let config = Config::load()?;
            let stylist = ImageStylist::from_config(&config)?;
            println!(
                "OK: {} client for {} ({})",
                stylist.variant(),
                config.provider.endpoint,
                config.provider.model
            );
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at: {}\nUse --force to overwrite.",
                    path.display()
                );
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            // api_key defaults to an ${OPENAI_API_KEY} reference, not a secret
            std::fs::write(&path, Config::default().to_toml()?)?;
            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Commented summary of what the provider section resolves to.
///
/// Never prints the key itself, only whether one is available.
fn resolved_summary(config: &Config) -> String {
    let variant = config.provider.variant();
    let source = if config.provider.kind.is_some() {
        "provider.kind"
    } else {
        "inferred from endpoint"
    };
    let key = match resolve_env_var(config.provider.api_key.trim()) {
        Some(_) if !variant.requires_api_key() => "set (unused by local models)",
        Some(_) => "set",
        None if variant.requires_api_key() => "MISSING",
        None => "not needed",
    };

    let mut out = String::new();
    let _ = writeln!(out, "# Resolved provider: {variant} ({source})");
    let _ = writeln!(out, "# API key: {key}");
    out
}
