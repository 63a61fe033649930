//! Error types for the application.

use thiserror::Error;

use crate::emotes::providers::ProviderId;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Discord error: {0}")]
    Discord(#[from] DiscordError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid emote token pattern: {0}")]
    Pattern(#[from] fancy_regex::Error),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    IoError { path: String, message: String },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Failure to complete a single provider lookup.
///
/// A well-formed "nothing found" answer is never a `LookupError`; providers
/// report that as `Ok(None)`.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Request to {provider} failed: {source}")]
    Transport {
        provider: ProviderId,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed response from {provider}: {source}")]
    Decode {
        provider: ProviderId,
        #[source]
        source: serde_json::Error,
    },
}

/// Discord-related errors.
#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Serenity error: {0}")]
    Serenity(#[from] serenity::Error),
}

/// Result type alias for provider lookups.
pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Result type alias for Discord operations.
pub type DiscordResult<T> = std::result::Result<T, DiscordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = ConfigError::ValidationError {
            message: "discord.token is required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Config validation failed: discord.token is required"
        );
    }

    #[test]
    fn test_decode_error_names_provider() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = LookupError::Decode {
            provider: ProviderId::FrankerFaceZ,
            source,
        };
        assert!(err.to_string().starts_with("Malformed response from ffz"));
    }

    #[test]
    fn test_app_error_wraps_config_error() {
        let err: AppError = ConfigError::ParseError {
            message: "bad".to_string(),
        }
        .into();
        assert!(err.to_string().contains("Configuration error"));
    }
}
