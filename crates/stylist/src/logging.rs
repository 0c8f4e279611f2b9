//! Logging setup for the CLI.
//!
//! The filter comes from `RUST_LOG` when set, else from `--verbose` or the
//! `[logging] level` config value. Everything goes to stderr so stdout only
//! ever carries the report or JSON result.

use stylist_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Levels accepted in `[logging] level`.
const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Level used when the configured one isn't recognized.
const FALLBACK_LEVEL: &str = "info";

/// Resolve the filter directive for a configured level.
///
/// `verbose` forces `debug`. Returns `None` for an unknown level name.
fn level_directive(configured: &str, verbose: bool) -> Option<&'static str> {
    if verbose {
        return Some("debug");
    }
    LEVELS
        .iter()
        .find(|level| level.eq_ignore_ascii_case(configured.trim()))
        .copied()
}

/// Install the global subscriber with the given default level.
fn init(level: &str, json_format: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let json_layer = json_format.then(|| fmt::layer().json().with_writer(std::io::stderr));
    let pretty_layer = (!json_format).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();
}

/// Initialize logging from the `[logging]` section plus CLI flags.
pub fn init_from_config(config: &Config, verbose: bool, json_logs: bool) {
    let level = level_directive(&config.logging.level, verbose).unwrap_or_else(|| {
        // Subscriber isn't installed yet
        eprintln!(
            "Warning: unknown logging.level {:?}, using {FALLBACK_LEVEL}",
            config.logging.level
        );
        FALLBACK_LEVEL
    });
    let json_format = json_logs || config.logging.format.eq_ignore_ascii_case("json");
    init(level, json_format);
}
