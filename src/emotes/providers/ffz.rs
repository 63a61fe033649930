//! FrankerFaceZ emote directory.
//!
//! Unlike 7TV and BetterTTV, FFZ wraps results in an object and uses its own
//! size scheme (`1`, `2`, `4`).

use serde::Deserialize;
use serenity::async_trait;
use tracing::debug;

use crate::common::error::LookupResult;
use crate::emotes::providers::{get_json, EmoteMatch, EmoteProvider, ProviderId};
use crate::emotes::size::SizeCodes;

const API_BASE: &str = "https://api.frankerfacez.com";
const SEARCH_PATH: &str = "/v1/emotes";
const CDN_BASE: &str = "https://cdn.frankerfacez.com/emoticon";

#[derive(Debug, Deserialize)]
struct FfzSearchResponse {
    #[serde(default)]
    emoticons: Vec<FfzEmote>,
}

#[derive(Debug, Deserialize)]
struct FfzEmote {
    id: u64,
    name: String,
}

pub struct FfzProvider {
    client: reqwest::Client,
    api_base: String,
}

impl FfzProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, API_BASE)
    }

    pub fn with_base_url(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }
}

#[async_trait]
impl EmoteProvider for FfzProvider {
    fn id(&self) -> ProviderId {
        ProviderId::FrankerFaceZ
    }

    async fn lookup(&self, name: &str, sizes: &SizeCodes) -> LookupResult<Option<EmoteMatch>> {
        let url = format!("{}{}", self.api_base, SEARCH_PATH);
        let response: Option<FfzSearchResponse> = get_json(
            &self.client,
            self.id(),
            &url,
            &[("q", name), ("page", "1"), ("per_page", "1")],
        )
        .await?;

        let Some(emote) = response.and_then(|r| r.emoticons.into_iter().next()) else {
            debug!("ffz has no emote named '{}'", name);
            return Ok(None);
        };

        Ok(Some(EmoteMatch {
            url: format!("{}/{}/{}", CDN_BASE, emote.id, sizes.ffz),
            name: emote.name,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::LookupError;
    use crate::emotes::size::SizeCategory;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_lookup_uses_ffz_size_scheme() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", SEARCH_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "LUL".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("per_page".into(), "1".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "_pages": 12,
                    "_total": 12,
                    "emoticons": [{"id": 128054, "name": "LUL", "height": 28}]
                }"#,
            )
            .create_async()
            .await;

        let provider = FfzProvider::with_base_url(reqwest::Client::new(), server.url());
        let emote = provider
            .lookup("LUL", &SizeCodes::for_size(SizeCategory::Large))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(emote.to_string(), "LUL -> https://cdn.frankerfacez.com/emoticon/128054/4");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_emoticons_is_absent() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", SEARCH_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"_pages": 0, "_total": 0}"#)
            .create_async()
            .await;

        let provider = FfzProvider::with_base_url(reqwest::Client::new(), server.url());
        let result = provider.lookup("nothing", &SizeCodes::default()).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_error() {
        // Nothing listens on port 1.
        let provider = FfzProvider::with_base_url(reqwest::Client::new(), "http://127.0.0.1:1");
        let result = provider.lookup("LUL", &SizeCodes::default()).await;
        assert!(matches!(
            result,
            Err(LookupError::Transport {
                provider: ProviderId::FrankerFaceZ,
                ..
            })
        ));
    }
}
