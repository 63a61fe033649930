//! 7TV emote directory.

use serde::Deserialize;
use serenity::async_trait;
use tracing::debug;

use crate::common::error::LookupResult;
use crate::emotes::providers::{get_json, EmoteMatch, EmoteProvider, ProviderId};
use crate::emotes::size::SizeCodes;

const API_BASE: &str = "https://7tv.io";
const SEARCH_PATH: &str = "/v3/emotes";
const CDN_BASE: &str = "https://cdn.7tv.app/emote";

/// Search candidate returned by the 7TV API.
#[derive(Debug, Deserialize)]
struct SevenTvEmote {
    id: String,
    name: String,
}

pub struct SevenTvProvider {
    client: reqwest::Client,
    api_base: String,
}

impl SevenTvProvider {
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
impl EmoteProvider for SevenTvProvider {
    fn id(&self) -> ProviderId {
        ProviderId::SevenTv
    }

    async fn lookup(&self, name: &str, sizes: &SizeCodes) -> LookupResult<Option<EmoteMatch>> {
        let url = format!("{}{}", self.api_base, SEARCH_PATH);
        let emotes: Option<Vec<SevenTvEmote>> =
            get_json(&self.client, self.id(), &url, &[("query", name)]).await?;

        let Some(emote) = emotes.and_then(|list| list.into_iter().next()) else {
            debug!("7tv has no emote named '{}'", name);
            return Ok(None);
        };

        Ok(Some(EmoteMatch {
            url: format!("{}/{}/{}", CDN_BASE, emote.id, sizes.generic),
            name: emote.name,
        }))
    }
}
