//! Inkling - typing-aware prompt co-pilot
//!
//! Main entry point for the Inkling CLI.

mod cli;
mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use inkling_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};

use crate::cli::{Cli, Commands};

const DEFAULT_CONFIG: &str = "config/default.toml";

/// Config path: the explicit one, else `config/default.toml` when present,
/// else `<config dir>/inkling/config.toml`.
fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    let local = PathBuf::from(DEFAULT_CONFIG);
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map(|dir| dir.join("inkling").join("config.toml"))
        .unwrap_or(local)
}

fn load_config(path: &Path) -> Result<Config> {
    ConfigLoader::load_or_default(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn validate_config(config: &Config) -> Result<()> {
    let warnings = ConfigValidator::validate(config)
        .into_result()
        .context("Invalid configuration")?;
    for warning in warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    Ok(())
}

/// Initialize tracing with console output and, when a log directory is
/// configured, a daily rolling file.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let file_layer = match logging.resolved_dir() {
        Some(log_dir) => {
            std::fs::create_dir_all(&log_dir)
                .with_context(|| format!("Failed to create log dir {}", log_dir.display()))?;
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("inkling")
                .filename_suffix("log")
                .max_log_files(14)
                .build(&log_dir)
                .context("Failed to create log file appender")?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false).boxed())
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = resolve_config_path(cli.config);
    // Logging is configured by the file, so read it before the subscriber exists.
    let config = load_config(&config_path)?;
    init_tracing(&config.logging)?;
    validate_config(&config)?;
    debug!("Loaded config from {}", config_path.display());

    match cli.command {
        Commands::Analyze { text } => commands::analyze(&config, &text),
        Commands::Models => commands::models(&config).await,
        Commands::Refine { text } => commands::refine(&config, &text).await,
        Commands::Demo { text, debounce_ms } => commands::demo(config, &text, debounce_ms).await,
    }
}
