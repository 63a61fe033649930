//! Emotefinder - Discord emote lookup bot
//!
//! Watches chat for `:emote_name:` tokens and answers with the emote's image
//! link from 7TV, BetterTTV or FrankerFaceZ, searched in configured order.

mod common;
mod config;
mod discord;
mod emotes;

use std::sync::Arc;

use anyhow::Result;
use tokio::signal;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use common::AppError;
use config::env::{check_empty_env_vars, get_config_path};
use config::validate::config_warnings;
use config::{load_and_validate, Config};
use discord::{DiscordBotBuilder, EmoteHandler};
use emotes::{build_http_client, EmoteResolver, EmoteScanner, ProviderRegistry, SizeCategory};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Emotefinder v{} starting...", env!("CARGO_PKG_VERSION"));

    for var in check_empty_env_vars() {
        warn!("Environment variable {} is set but empty", var);
    }

    // Load configuration
    let config_path = get_config_path();
    info!("Loading configuration from {}...", config_path);

    let config = load_and_validate(&config_path).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        error!("Please ensure {} exists and is properly formatted.", config_path);
        e
    })?;

    for warning in config_warnings(&config) {
        warn!("{}", warning);
    }

    info!("Configuration loaded successfully");
    info!("  Sources: {}", config.emotes.sources.join(", "));
    info!(
        "  Size: {}",
        SizeCategory::from_name(&config.emotes.size).unwrap_or_default()
    );
    info!("  Request delay: {}ms", config.emotes.request_delay_ms);

    let handler = build_handler(&config)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    info!("Starting Discord bot...");
    let bot = DiscordBotBuilder::new(config.discord.token.clone(), handler)
        .build()
        .await
        .map_err(AppError::from)?;
    let mut discord_task = tokio::spawn(bot.run(shutdown_rx));

    let shutdown = tokio::select! {
        biased;
        _ = shutdown_signal() => {
            info!("Shutdown signal received - disconnecting...");
            true
        }
        _ = &mut discord_task => false,
    };

    if shutdown {
        if let Err(e) = shutdown_tx.send(true) {
            debug!("Shutdown channel closed (Discord task already exited): {}", e);
        }
        let timeout = tokio::time::Duration::from_secs(5);
        match tokio::time::timeout(timeout, discord_task).await {
            Ok(Ok(())) => info!("Discord client stopped gracefully"),
            Ok(Err(e)) => warn!("Discord task panicked: {}", e),
            Err(_) => warn!("Discord shutdown timed out"),
        }
    }

    info!("Exiting...");
    Ok(())
}

/// Wire providers, resolver and scanner into the Discord message handler.
fn build_handler(config: &Config) -> Result<EmoteHandler, AppError> {
    let http = build_http_client(config.emotes.request_timeout())?;
    let registry = Arc::new(ProviderRegistry::with_defaults(http));
    debug!("Registered emote providers: {:?}", registry);

    let scanner = EmoteScanner::new(
        EmoteResolver::new(registry),
        config.emotes.request_delay(),
        config.emotes.max_emotes_per_message,
    )?;

    Ok(EmoteHandler::new(
        Arc::new(scanner),
        &config.emotes,
        config.discord.clone(),
    ))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
