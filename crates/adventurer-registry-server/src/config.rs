//! Bot configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_COMMAND_PREFIX: &str = "!ar";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value '{value}' for environment variable {name}")]
    Invalid { name: &'static str, value: String },
}

/// Bot configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Discord bot token.
    /// Env: `DISCORD_TOKEN` (required)
    pub discord_token: String,

    /// Postgres connection string.
    /// Env: `DATABASE_URL` (required)
    pub database_url: String,

    /// Token every command starts with.
    /// Env: `COMMAND_PREFIX`
    /// Default: `!ar`
    pub command_prefix: String,

    /// Upper bound on pooled database connections.
    /// Env: `DATABASE_MAX_CONNECTIONS`
    /// Default: `5`
    pub database_max_connections: u32,
}

impl BotConfig {
    /// Load `.env` (if present) and read the configuration from the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    name: "DATABASE_MAX_CONNECTIONS",
                    value,
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            command_prefix: lookup("COMMAND_PREFIX")
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            database_max_connections,
        })
    }
}

// Secrets stay out of logs
impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("discord_token", &"<redacted>")
            .field("database_url", &"<redacted>")
            .field("command_prefix", &self.command_prefix)
            .field("database_max_connections", &self.database_max_connections)
            .finish()
    }
}
