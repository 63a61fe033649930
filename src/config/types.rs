//! Configuration type definitions.

use std::time::Duration;

use serde::Deserialize;

use crate::emotes::ScanSettings;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub discord: DiscordConfig,
    #[serde(default)]
    pub emotes: EmotesConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    /// May be left empty when `EMOTEFINDER_DISCORD_TOKEN` is set.
    #[serde(default)]
    pub token: String,
    /// Channel ids the bot answers in. Empty means every channel it can read.
    #[serde(default)]
    pub channels: Vec<u64>,
}

/// Emote lookup settings.
#[derive(Debug, Clone, Deserialize)]
pub struct EmotesConfig {
    /// Emote sources in search priority order ("7tv", "bttv", "ffz").
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
    /// Emote size: "small", "medium" or "large".
    #[serde(default = "default_size")]
    pub size: String,
    /// Pause between lookups of consecutive tokens in one message.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    /// Timeout for a single directory request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Tokens resolved per message at most (0 = unlimited).
    #[serde(default = "default_max_emotes_per_message")]
    pub max_emotes_per_message: usize,
}

fn default_sources() -> Vec<String> {
    vec!["bttv".to_string(), "ffz".to_string()]
}

fn default_size() -> String {
    "large".to_string()
}

fn default_request_delay_ms() -> u64 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_max_emotes_per_message() -> usize {
    10
}

impl Default for EmotesConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            size: default_size(),
            request_delay_ms: default_request_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            max_emotes_per_message: default_max_emotes_per_message(),
        }
    }
}

impl EmotesConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Settings handed to the scanner for each message.
    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            sources: self.sources.clone(),
            size: Some(self.size.clone()),
        }
    }
}

impl DiscordConfig {
    /// Whether the bot should answer in the given channel.
    pub fn is_channel_enabled(&self, channel_id: u64) -> bool {
        self.channels.is_empty() || self.channels.contains(&channel_id)
    }
}
