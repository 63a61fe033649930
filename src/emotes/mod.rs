//! Emote resolution pipeline.
//!
//! ## Module Structure
//!
//! - `size`: size category to provider size code mapping
//! - `providers`: one client per emote directory
//! - `registry`: provider id to client mapping
//! - `resolver`: ordered first-match-wins lookup
//! - `scanner`: token extraction, pacing and reply formatting

pub mod providers;
pub mod registry;
pub mod resolver;
pub mod scanner;
pub mod size;

#[cfg(test)]
pub(crate) mod testing;

pub use providers::{build_http_client, ProviderId};
pub use registry::ProviderRegistry;
pub use resolver::EmoteResolver;
pub use scanner::{EmoteScanner, ScanSettings};
pub use size::SizeCategory;
