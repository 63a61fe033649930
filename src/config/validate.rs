//! Configuration validation.
//!
//! Validates configuration values and provides helpful error messages.
//! Unknown emote sources and sizes are only warnings: at runtime they are
//! skipped and fall back to `large` respectively.

use crate::common::error::ConfigError;
use crate::config::types::Config;
use crate::emotes::{ProviderId, SizeCategory};

/// Validate a configuration and return detailed errors.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    // Validate Discord config
    if config.discord.token.is_empty() {
        errors.push("discord.token is required".to_string());
    }
    if config.discord.token == "YOUR_DISCORD_TOKEN_HERE" {
        errors.push("discord.token has not been configured (still using placeholder)".to_string());
    }
    for (i, channel) in config.discord.channels.iter().enumerate() {
        if *channel == 0 {
            errors.push(format!("discord.channels[{}] must be non-zero", i));
        }
    }

    // Validate emote settings
    if config.emotes.sources.is_empty() {
        errors.push("emotes.sources is empty - no emote sources to search".to_string());
    }
    if config.emotes.request_timeout_secs == 0 {
        errors.push("emotes.request_timeout_secs must be non-zero".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            message: errors.join("\n"),
        })
    }
}

/// Collect non-fatal configuration problems.
pub fn config_warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    for (i, source) in config.emotes.sources.iter().enumerate() {
        if source.parse::<ProviderId>().is_err() {
            let known: Vec<&str> = ProviderId::ALL.iter().map(ProviderId::as_str).collect();
            warnings.push(format!(
                "emotes.sources[{}] '{}' is not a known source (use: {}) and will be skipped",
                i,
                source,
                known.join(", ")
            ));
        }
    }

    if SizeCategory::from_name(&config.emotes.size).is_none() {
        warnings.push(format!(
            "emotes.size '{}' is invalid (use: small, medium, large), using {}",
            config.emotes.size,
            SizeCategory::Large
        ));
    }

    if config.emotes.max_emotes_per_message == 0 {
        warnings.push(
            "emotes.max_emotes_per_message is 0 - every token in a message will be looked up"
                .to_string(),
        );
    }

    warnings
}
