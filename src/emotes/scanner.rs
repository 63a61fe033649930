//! Message scanning.
//!
//! Finds `:name:` tokens in a chat message, resolves each one in order and
//! formats a reply for every emote found.

use std::time::Duration;

use fancy_regex::Regex;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::emotes::resolver::EmoteResolver;
use crate::emotes::size::SizeCodes;

/// Token pattern: a colon, one or more word characters, a colon.
const TOKEN_PATTERN: &str = r":(\w+):";

/// An emote name found in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmoteToken {
    /// Name between the colons.
    pub name: String,
    /// Byte offset of the opening colon.
    pub position: usize,
}

/// Per-scan inputs taken from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    /// Source names in priority order.
    pub sources: Vec<String>,
    /// Size category name; unrecognized values mean `large`.
    pub size: Option<String>,
}

/// Scans messages and resolves their emote tokens.
#[derive(Debug, Clone)]
pub struct EmoteScanner {
    pattern: Regex,
    resolver: EmoteResolver,
    request_delay: Duration,
    /// Maximum tokens resolved per message (0 = unlimited).
    max_tokens: usize,
}

impl EmoteScanner {
    pub fn new(
        resolver: EmoteResolver,
        request_delay: Duration,
        max_tokens: usize,
    ) -> Result<Self, fancy_regex::Error> {
        Ok(Self {
            pattern: Regex::new(TOKEN_PATTERN)?,
            resolver,
            request_delay,
            max_tokens,
        })
    }

    /// Extract all non-overlapping emote tokens, left to right.
    ///
    /// Repeated names are returned once per occurrence.
    pub fn extract_tokens(&self, message: &str) -> Vec<EmoteToken> {
        self.pattern
            .captures_iter(message)
            .filter_map(|caps| match caps {
                Ok(caps) => caps.get(1).map(|name| EmoteToken {
                    name: name.as_str().to_string(),
                    position: name.start() - 1,
                }),
                Err(e) => {
                    warn!("Emote token match error: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Resolve every token in `message`, sending each reply as soon as it resolves.
    ///
    /// Tokens with no match produce no reply. Consecutive lookups are
    /// separated by the request delay. Stops early once the receiver is gone.
    pub async fn scan_into(
        &self,
        message: &str,
        settings: &ScanSettings,
        replies: mpsc::UnboundedSender<String>,
    ) {
        let mut tokens = self.extract_tokens(message);
        if tokens.is_empty() {
            return;
        }

        if self.max_tokens > 0 && tokens.len() > self.max_tokens {
            debug!(
                "Message has {} emote tokens, only resolving the first {}",
                tokens.len(),
                self.max_tokens
            );
            tokens.truncate(self.max_tokens);
        }

        let sizes = SizeCodes::for_category(settings.size.as_deref());

        for (idx, token) in tokens.iter().enumerate() {
            if idx > 0 {
                sleep(self.request_delay).await;
            }

            match self
                .resolver
                .resolve(&token.name, &sizes, &settings.sources)
                .await
            {
                Some(emote) => {
                    if replies.send(emote.to_string()).is_err() {
                        debug!("Reply receiver closed, abandoning scan");
                        return;
                    }
                }
                None => debug!(
                    "No source knows emote '{}' (offset {})",
                    token.name, token.position
                ),
            }
        }
    }

    /// Resolve every token in `message` and collect the replies in token order.
    #[cfg(test)]
    pub async fn scan(&self, message: &str, settings: &ScanSettings) -> Vec<String> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        self.scan_into(message, settings, tx).await;

        let mut replies = Vec::new();
        while let Ok(reply) = rx.try_recv() {
            replies.push(reply);
        }
        replies
    }
}
