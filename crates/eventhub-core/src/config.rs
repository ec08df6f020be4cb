use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::types::SortKey;

/// Greeting seeded as the first bot message of every chat session unless
/// `[chat] greeting` overrides it.
pub const DEFAULT_GREETING: &str = "Hi! I'm your AI assistant. How can I help you today?";

/// Top-level configuration for EventHub.
///
/// Loaded from `~/.eventhub/config.toml` by default. Every section falls back
/// to its defaults, so partial files are valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventHubConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl EventHubConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EventHubConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Event catalog settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to a JSON catalog. The built-in seed catalog is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Sort order applied before the user picks one.
    pub default_sort: SortKey,
}

/// Chat assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Delay before the bot reply is appended, in milliseconds.
    pub reply_delay_ms: u64,
    /// Discard history when the panel is reopened.
    pub reset_on_reopen: bool,
    /// Optional cap on message length in characters. Unlimited when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_message_len: Option<usize>,
    /// Replacement for the built-in greeting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            reset_on_reopen: false,
            max_message_len: None,
            greeting: None,
        }
    }
}
