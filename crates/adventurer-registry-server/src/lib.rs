//! Adventurer Registry server internals
//!
//! Infrastructure adapters and process configuration used by the
//! `adventurer-registry` binary.

pub mod adapters;
pub mod config;

pub use adapters::PgCharacterRepository;
pub use config::{BotConfig, ConfigError};
