//! In-memory provider used by resolver and scanner tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serenity::async_trait;
use tokio::time::Instant;

use crate::common::error::LookupResult;
use crate::emotes::providers::{EmoteMatch, EmoteProvider, ProviderId};
use crate::emotes::size::SizeCodes;

/// Serves a fixed set of emotes and records every lookup it receives.
#[derive(Clone)]
pub struct FakeProvider {
    id: ProviderId,
    cdn: String,
    emotes: HashMap<String, (String, String)>,
    calls: Arc<Mutex<Vec<(String, Instant)>>>,
}

impl FakeProvider {
    pub fn new(id: ProviderId, cdn: &str) -> Self {
        Self {
            id,
            cdn: cdn.to_string(),
            emotes: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add an emote matched by `query` (case-insensitive), reported as `name`.
    pub fn with_emote(mut self, query: &str, name: &str, emote_id: &str) -> Self {
        self.emotes.insert(
            query.to_lowercase(),
            (name.to_string(), emote_id.to_string()),
        );
        self
    }

    /// Names looked up so far, in order.
    pub fn queried(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Instants at which lookups arrived, in order.
    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }
}

#[async_trait]
impl EmoteProvider for FakeProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    async fn lookup(&self, name: &str, sizes: &SizeCodes) -> LookupResult<Option<EmoteMatch>> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), Instant::now()));

        // Same path shapes as the real CDNs: FrankerFaceZ has its own size codes.
        let (path, size) = match self.id {
            ProviderId::FrankerFaceZ => ("emoticon", sizes.ffz),
            ProviderId::SevenTv | ProviderId::BetterTtv => ("emote", sizes.generic),
        };

        Ok(self
            .emotes
            .get(&name.to_lowercase())
            .map(|(display, emote_id)| EmoteMatch {
                name: display.clone(),
                url: format!("https://{}/{}/{}/{}", self.cdn, path, emote_id, size),
            }))
    }
}
