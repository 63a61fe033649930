//! Discord bot client abstraction.
//!
//! Provides a high-level interface for creating and running the Discord bot,
//! hiding serenity implementation details from the rest of the application.

use std::sync::Arc;
use std::time::Duration;

use backon::BackoffBuilder;
use serenity::prelude::*;
use serenity::Client;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::common::error::DiscordResult;
use crate::discord::handler::EmoteHandler;

const MAX_RECONNECT_DELAY: Duration = Duration::from_secs(5 * 60);

/// Builder for creating the Discord bot.
pub struct DiscordBotBuilder {
    token: String,
    handler: Arc<EmoteHandler>,
}

impl DiscordBotBuilder {
    /// Create a new Discord bot builder.
    pub fn new(token: String, handler: EmoteHandler) -> Self {
        Self {
            token,
            handler: Arc::new(handler),
        }
    }

    /// Build the Discord bot.
    pub async fn build(self) -> DiscordResult<DiscordBot> {
        let client = build_client(&self.token, self.handler.clone()).await?;

        Ok(DiscordBot {
            client: Some(client),
            token: self.token,
            handler: self.handler,
        })
    }
}

async fn build_client(token: &str, handler: Arc<EmoteHandler>) -> DiscordResult<Client> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(token, intents)
        .event_handler_arc(handler)
        .await?;
    Ok(client)
}

/// Create an exponential backoff iterator for Discord reconnection.
/// 5s initial, 5min max, factor 1.1, with jitter, unlimited retries.
fn discord_backoff() -> impl Iterator<Item = Duration> {
    backon::ExponentialBuilder::default()
        .with_min_delay(Duration::from_secs(5))
        .with_max_delay(MAX_RECONNECT_DELAY)
        .with_factor(1.1)
        .with_jitter()
        .without_max_times()
        .build()
}

pub struct DiscordBot {
    client: Option<Client>,
    token: String,
    handler: Arc<EmoteHandler>,
}

impl DiscordBot {
    /// Run the bot until the shutdown signal fires or the gateway closes normally.
    pub async fn run(mut self, mut shutdown_rx: watch::Receiver<bool>) {
        let mut backoff = discord_backoff();

        loop {
            info!("Connecting to Discord...");

            let mut client = match self.client.take() {
                Some(client) => client,
                None => {
                    // serenity mostly handles reconnections itself.
                    match build_client(&self.token, self.handler.clone()).await {
                        Ok(client) => {
                            backoff = discord_backoff();
                            client
                        }
                        Err(e) => {
                            error!("Failed to rebuild Discord client: {}", e);
                            let delay = backoff.next().unwrap_or(MAX_RECONNECT_DELAY);
                            warn!("Retrying in {:.1}s...", delay.as_secs_f64());
                            sleep(delay).await;
                            continue;
                        }
                    }
                }
            };

            let shard_manager = client.shard_manager.clone();

            tokio::select! {
                result = client.start() => match result {
                    Ok(()) => {
                        info!("Discord client disconnected normally");
                        break;
                    }
                    Err(e) => {
                        error!("Discord client error: {}", e);
                        let delay = backoff.next().unwrap_or(MAX_RECONNECT_DELAY);
                        warn!(
                            "Discord disconnected. Reconnecting in {:.1}s...",
                            delay.as_secs_f64(),
                        );
                        sleep(delay).await;
                    }
                },
                _ = wait_for_shutdown(&mut shutdown_rx) => {
                    info!("Initiating graceful Discord shutdown...");
                    shard_manager.shutdown_all().await;
                    info!("Discord shutdown complete");
                    break;
                }
            }
        }

        info!("Discord task ended");
    }
}

/// Resolve once the shutdown flag is set. Never resolves if the sender is dropped.
async fn wait_for_shutdown(shutdown_rx: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown_rx.borrow() {
            return;
        }
        if shutdown_rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
