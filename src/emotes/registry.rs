//! Provider registry.
//!
//! Maps each [`ProviderId`] to the client that serves it. Built once at
//! startup and shared read-only by every scan.

use std::collections::HashMap;
use std::sync::Arc;

use crate::emotes::providers::{
    BttvProvider, EmoteProvider, FfzProvider, ProviderId, SevenTvProvider,
};

#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderId, Arc<dyn EmoteProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the three public directories, sharing one HTTP client.
    pub fn with_defaults(client: reqwest::Client) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SevenTvProvider::new(client.clone())));
        registry.register(Arc::new(BttvProvider::new(client.clone())));
        registry.register(Arc::new(FfzProvider::new(client)));
        registry
    }

    /// Register a provider under its own id, replacing any previous one.
    pub fn register(&mut self, provider: Arc<dyn EmoteProvider>) {
        self.providers.insert(provider.id(), provider);
    }

    pub fn get(&self, id: ProviderId) -> Option<&Arc<dyn EmoteProvider>> {
        self.providers.get(&id)
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<_> = self.providers.keys().map(ProviderId::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("ProviderRegistry").field("providers", &ids).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_provider() {
        let registry = ProviderRegistry::with_defaults(reqwest::Client::new());
        for id in ProviderId::ALL {
            assert_eq!(registry.get(id).map(|p| p.id()), Some(id));
        }
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut registry = ProviderRegistry::new();
        assert!(registry.get(ProviderId::FrankerFaceZ).is_none());
        registry.register(Arc::new(FfzProvider::new(reqwest::Client::new())));
        registry.register(Arc::new(FfzProvider::with_base_url(
            reqwest::Client::new(),
            "http://localhost",
        )));
        assert_eq!(
            format!("{:?}", registry),
            r#"ProviderRegistry { providers: ["ffz"] }"#
        );
        assert!(registry.get(ProviderId::SevenTv).is_none());
    }

    #[test]
    fn test_debug_lists_ids() {
        let registry = ProviderRegistry::with_defaults(reqwest::Client::new());
        assert_eq!(
            format!("{:?}", registry),
            r#"ProviderRegistry { providers: ["7tv", "bttv", "ffz"] }"#
        );
    }
}
