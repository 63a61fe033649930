//! Environment variable overrides for configuration.
//!
//! Supports overriding config values with environment variables:
//! - `EMOTEFINDER_DISCORD_TOKEN` - Discord bot token
//! - `EMOTEFINDER_SOURCES` - Comma-separated emote sources in priority order
//! - `EMOTEFINDER_SIZE` - Emote size (small, medium, large)
//! - `EMOTEFINDER_REQUEST_DELAY_MS` - Pause between lookups in one message

use std::env;

use crate::config::types::Config;

/// Environment variable prefix for all config overrides.
const ENV_PREFIX: &str = "EMOTEFINDER";

/// Apply environment variable overrides to a config.
///
/// This allows the bot token to be provided via the environment instead of
/// the config file.
pub fn apply_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| env::var(name).ok())
}

/// Apply overrides read through `lookup`.
fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    let var = |suffix: &str| lookup(&format!("{}_{}", ENV_PREFIX, suffix));

    if let Some(token) = var("DISCORD_TOKEN") {
        config.discord.token = token;
    }

    if let Some(sources) = var("SOURCES") {
        let sources: Vec<String> = sources
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if !sources.is_empty() {
            config.emotes.sources = sources;
        }
    }

    if let Some(size) = var("SIZE") {
        config.emotes.size = size;
    }

    if let Some(delay) = var("REQUEST_DELAY_MS") {
        if let Ok(delay) = delay.parse() {
            config.emotes.request_delay_ms = delay;
        }
    }

    config
}

/// Check if any required environment variables are set but empty.
///
/// Returns a list of variable names that are set but empty.
pub fn check_empty_env_vars() -> Vec<String> {
    let vars = [format!("{}_DISCORD_TOKEN", ENV_PREFIX)];

    vars.into_iter()
        .filter(|var| env::var(var).map(|v| v.is_empty()).unwrap_or(false))
        .collect()
}

/// Get the config file path from environment or use default.
///
/// Checks `EMOTEFINDER_CONFIG` environment variable, otherwise returns "emotefinder.conf".
pub fn get_config_path() -> String {
    env::var(format!("{}_CONFIG", ENV_PREFIX)).unwrap_or_else(|_| "emotefinder.conf".to_string())
}
