//! CLI argument definitions for the EventHub application.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eventhub_core::types::{CategoryFilter, PriceTier, SortKey};

/// EventHub: browse community events and chat with the event assistant.
#[derive(Parser, Debug)]
#[command(name = "eventhub", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter and sort the event catalog.
    Browse(BrowseArgs),
    /// Talk to the event assistant on stdin.
    Chat,
}

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// JSON catalog to load instead of the configured source.
    #[arg(long = "catalog")]
    pub catalog: Option<PathBuf>,

    /// Category: All, Tech, Design, Networking or Other.
    #[arg(long = "category", default_value = "All")]
    pub category: CategoryFilter,

    /// Price tier: All, Free or Premium.
    #[arg(long = "price", default_value = "All")]
    pub price: PriceTier,

    /// Case-insensitive text to look for in titles, descriptions and tags.
    #[arg(short = 'q', long = "query", default_value = "")]
    pub query: String,

    /// Sort key: date, price or rating. Defaults to the configured order.
    #[arg(short = 's', long = "sort")]
    pub sort: Option<SortKey>,

    /// Print results as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > EVENTHUB_CONFIG env var > ~/.eventhub/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("EVENTHUB_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Level used before the config file has been read.
    pub fn bootstrap_log_level(&self) -> String {
        self.resolve_log_level("info")
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

impl BrowseArgs {
    /// Resolve the catalog source.
    ///
    /// Priority: --catalog flag > config file value. `None` means the
    /// built-in catalog.
    pub fn resolve_catalog_path(&self, config_source: Option<&str>) -> Option<PathBuf> {
        self.catalog
            .clone()
            .or_else(|| config_source.map(PathBuf::from))
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".eventhub").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".eventhub").join("config.toml");
    }
    PathBuf::from("config.toml")
}
