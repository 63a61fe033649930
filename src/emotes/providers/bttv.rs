//! BetterTTV shared emote directory.

use serde::Deserialize;
use serenity::async_trait;
use tracing::debug;

use crate::common::error::LookupResult;
use crate::emotes::providers::{get_json, EmoteMatch, EmoteProvider, ProviderId};
use crate::emotes::size::SizeCodes;

const API_BASE: &str = "https://api.betterttv.net";
const SEARCH_PATH: &str = "/3/emotes/shared/search";
const CDN_BASE: &str = "https://cdn.betterttv.net/emote";

/// Search candidate returned by the BetterTTV API.
#[derive(Debug, Deserialize)]
struct BttvEmote {
    id: String,
    /// BetterTTV calls the display name the emote "code".
    code: String,
}

pub struct BttvProvider {
    client: reqwest::Client,
    api_base: String,
}

impl BttvProvider {
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
impl EmoteProvider for BttvProvider {
    fn id(&self) -> ProviderId {
        ProviderId::BetterTtv
    }

    async fn lookup(&self, name: &str, sizes: &SizeCodes) -> LookupResult<Option<EmoteMatch>> {
        let url = format!("{}{}", self.api_base, SEARCH_PATH);
        let emotes: Option<Vec<BttvEmote>> = get_json(
            &self.client,
            self.id(),
            &url,
            &[("query", name), ("limit", "1")],
        )
        .await?;

        match emotes.and_then(|list| list.into_iter().next()) {
            Some(emote) => Ok(Some(EmoteMatch {
                url: format!("{}/{}/{}", CDN_BASE, emote.id, sizes.generic),
                name: emote.code,
            })),
            None => {
                debug!("bttv has no emote named '{}'", name);
                Ok(None)
            }
        }
    }
}
