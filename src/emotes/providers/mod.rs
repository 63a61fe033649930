//! Emote directory clients.
//!
//! Each provider performs a single-name lookup against one external emote
//! directory and normalizes the first candidate into an [`EmoteMatch`].

pub mod bttv;
pub mod ffz;
pub mod seventv;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serenity::async_trait;
use tracing::debug;

use crate::common::error::{LookupError, LookupResult};
use crate::emotes::size::SizeCodes;

pub use bttv::BttvProvider;
pub use ffz::FfzProvider;
pub use seventv::SevenTvProvider;

/// User agent sent with every directory request.
const USER_AGENT: &str = concat!("emotefinder/", env!("CARGO_PKG_VERSION"));

/// Known emote directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    SevenTv,
    BetterTtv,
    FrankerFaceZ,
}

impl ProviderId {
    pub const ALL: [ProviderId; 3] = [
        ProviderId::SevenTv,
        ProviderId::BetterTtv,
        ProviderId::FrankerFaceZ,
    ];

    /// Configuration name of this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SevenTv => "7tv",
            Self::BetterTtv => "bttv",
            Self::FrankerFaceZ => "ffz",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7tv" => Ok(Self::SevenTv),
            "bttv" => Ok(Self::BetterTtv),
            "ffz" => Ok(Self::FrankerFaceZ),
            other => Err(format!("unknown emote source '{}'", other)),
        }
    }
}

/// A resolved emote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmoteMatch {
    /// Display name as reported by the provider.
    pub name: String,
    /// CDN URL of the emote image at the requested size.
    pub url: String,
}

impl fmt::Display for EmoteMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.url)
    }
}

/// A single emote directory.
#[async_trait]
pub trait EmoteProvider: Send + Sync {
    fn id(&self) -> ProviderId;

    /// Look up an emote by exact name.
    ///
    /// Returns `Ok(None)` when the directory answered but has no such emote
    /// (including non-success statuses). Returns `Err` only when the request
    /// itself could not be completed or the answer could not be decoded.
    async fn lookup(&self, name: &str, sizes: &SizeCodes) -> LookupResult<Option<EmoteMatch>>;
}

/// Build the HTTP client shared by all providers.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(5)))
        .user_agent(USER_AGENT)
        .build()
}

/// Issue one GET request and decode the JSON body.
///
/// Non-success statuses yield `Ok(None)`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    provider: ProviderId,
    url: &str,
    query: &[(&str, &str)],
) -> LookupResult<Option<T>> {
    let transport = |source: reqwest::Error| LookupError::Transport { provider, source };

    let response = client.get(url).query(query).send().await.map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        debug!("{} answered {} for {:?}", provider, status, query);
        return Ok(None);
    }

    let body = response.text().await.map_err(transport)?;
    serde_json::from_str(&body)
        .map(Some)
        .map_err(|source| LookupError::Decode { provider, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_formatting() {
        let emote = EmoteMatch {
            name: "Kappa".to_string(),
            url: "https://cdn.example/e/123/3x".to_string(),
        };
        assert_eq!(emote.to_string(), "Kappa -> https://cdn.example/e/123/3x");
    }

    #[test]
    fn test_provider_id_parsing() {
        assert_eq!("7tv".parse::<ProviderId>(), Ok(ProviderId::SevenTv));
        assert_eq!("bttv".parse::<ProviderId>(), Ok(ProviderId::BetterTtv));
        assert_eq!("ffz".parse::<ProviderId>(), Ok(ProviderId::FrankerFaceZ));
        assert!("twitch".parse::<ProviderId>().is_err());
    }

    #[test]
    fn test_provider_names_match_exactly() {
        assert!("BTTV".parse::<ProviderId>().is_err());
        assert!(" ffz".parse::<ProviderId>().is_err());
        assert!("7TV".parse::<ProviderId>().is_err());
    }

    #[tokio::test]
    async fn test_client_gives_up_on_silent_server() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept and hold the connection without ever answering.
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(60)).await;
            drop(socket);
        });

        let client = build_http_client(Duration::from_secs(1)).unwrap();
        let provider = SevenTvProvider::with_base_url(client, format!("http://{}", addr));

        let started = std::time::Instant::now();
        let result = provider.lookup("kappa", &SizeCodes::default()).await;
        assert!(matches!(
            result,
            Err(LookupError::Transport {
                provider: ProviderId::SevenTv,
                ..
            })
        ));
        assert!(started.elapsed() < Duration::from_secs(10));
        server.abort();
    }
}
