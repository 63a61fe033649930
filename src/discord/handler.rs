//! Discord message event handling.
//!
//! Every readable message is scanned for emote tokens and each resolved
//! emote is answered in the same channel as soon as it resolves, in token order.

use std::sync::Arc;

use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::config::types::{DiscordConfig, EmotesConfig};
use crate::emotes::{EmoteScanner, ScanSettings};

/// Discord event handler.
pub struct EmoteHandler {
    scanner: Arc<EmoteScanner>,
    settings: ScanSettings,
    discord: DiscordConfig,
}

impl EmoteHandler {
    pub fn new(scanner: Arc<EmoteScanner>, emotes: &EmotesConfig, discord: DiscordConfig) -> Self {
        Self {
            scanner,
            settings: emotes.scan_settings(),
            discord,
        }
    }

    /// Scan `content`, passing each reply to `replies` as soon as it resolves.
    pub async fn answer(&self, content: &str, replies: mpsc::UnboundedSender<String>) {
        self.scanner.scan_into(content, &self.settings, replies).await
    }
}

#[async_trait]
impl EventHandler for EmoteHandler {
    async fn message(&self, ctx: Context, msg: Message) {
        // Ignore our own messages
        if msg.author.id == ctx.cache.current_user().id {
            return;
        }

        // Ignore bots
        if msg.author.bot {
            return;
        }

        if !self.discord.is_channel_enabled(msg.channel_id.get()) {
            return;
        }

        let content = msg.content.trim();
        if content.is_empty() {
            return;
        }

        let (tx, mut rx) = mpsc::unbounded_channel();
        let send = async {
            let mut sent = 0usize;
            while let Some(reply) = rx.recv().await {
                if let Err(e) = msg.channel_id.say(&ctx.http, &reply).await {
                    error!("Failed to send emote reply to {}: {}", msg.channel_id, e);
                    continue;
                }
                sent += 1;
            }
            sent
        };

        let ((), sent) = tokio::join!(self.answer(content, tx), send);
        if sent > 0 {
            debug!(
                "Answered {} emote(s) for {} in channel {}",
                sent, msg.author.name, msg.channel_id
            );
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Discord bot connected as {}", ready.user.name);
        info!(
            "Searching emote sources in order: {}",
            self.settings.sources.join(", ")
        );
        if !self.discord.channels.is_empty() {
            info!("Answering in {} channel(s) only", self.discord.channels.len());
        }
    }
}
