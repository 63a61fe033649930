//! Discord bot integration.
//!
//! This module hosts the emote scanner inside a Discord bot: every message
//! the bot can read is scanned and resolved emotes are answered in place.

pub mod client;
pub mod handler;

// Re-export main types for external use
pub use client::DiscordBotBuilder;
pub use handler::EmoteHandler;
