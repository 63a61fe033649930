//! Ordered emote resolution.
//!
//! Providers are tried strictly in the configured order and the first one
//! that knows the emote wins. Later providers are never asked once a match
//! is found, so cheap or authoritative sources can be listed first.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::emotes::providers::{EmoteMatch, ProviderId};
use crate::emotes::registry::ProviderRegistry;
use crate::emotes::size::SizeCodes;

#[derive(Debug, Clone)]
pub struct EmoteResolver {
    registry: Arc<ProviderRegistry>,
}

impl EmoteResolver {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve one emote name against `order`.
    ///
    /// Unknown or unregistered sources are skipped. A provider that fails is
    /// treated as not having the emote.
    pub async fn resolve(
        &self,
        name: &str,
        sizes: &SizeCodes,
        order: &[String],
    ) -> Option<EmoteMatch> {
        for source in order {
            let id = match source.parse::<ProviderId>() {
                Ok(id) => id,
                Err(e) => {
                    debug!("Skipping source: {}", e);
                    continue;
                }
            };

            let Some(provider) = self.registry.get(id) else {
                debug!("No client registered for source '{}'", id);
                continue;
            };

            match provider.lookup(name, sizes).await {
                Ok(Some(emote)) => {
                    debug!("Resolved '{}' via {}", name, id);
                    return Some(emote);
                }
                Ok(None) => {}
                Err(e) => warn!("Lookup of '{}' failed: {}", name, e),
            }
        }

        None
    }
}
