//! Discord Integration for the Adventurer Registry
//!
//! Connects the command router to Discord through serenity: gateway
//! messages are converted into [`InboundMessage`]s, routed, and the replies
//! are delivered back over the Discord HTTP API.
//!
//! # Usage
//!
//! ```rust,ignore
//! use adventurer_registry_discord::{DiscordConfig, DiscordIntegration};
//!
//! let config = DiscordConfig::new("your-bot-token");
//! let mut client = DiscordIntegration::new(config, router).into_client().await?;
//! client.start().await?;
//! ```
//!
//! [`InboundMessage`]: adventurer_registry::InboundMessage

mod client;
mod config;
mod integration;

pub use client::DiscordClient;
pub use config::DiscordConfig;
pub use integration::DiscordIntegration;
