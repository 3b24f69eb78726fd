//! Discord configuration

use serde::{Deserialize, Serialize};

/// Configuration for Discord integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token
    pub token: String,
    /// Whether to answer commands sent in direct messages
    pub respond_to_dms: bool,
    /// Whether to answer commands sent in guild channels
    pub respond_in_guilds: bool,
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Enable or disable direct-message commands
    pub fn with_respond_to_dms(mut self, enable: bool) -> Self {
        self.respond_to_dms = enable;
        self
    }

    /// Enable or disable guild channel commands
    pub fn with_respond_in_guilds(mut self, enable: bool) -> Self {
        self.respond_in_guilds = enable;
        self
    }

    /// Whether a message from this kind of channel should be handled
    pub fn accepts(&self, is_direct: bool) -> bool {
        if is_direct {
            self.respond_to_dms
        } else {
            self.respond_in_guilds
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            respond_to_dms: true,
            respond_in_guilds: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DiscordConfig::new("test-token")
            .with_respond_to_dms(false)
            .with_respond_in_guilds(true);

        assert_eq!(config.token, "test-token");
        assert!(!config.accepts(true));
        assert!(config.accepts(false));
    }

    #[test]
    fn test_defaults_accept_everything() {
        let config = DiscordConfig::default();
        assert!(config.accepts(true));
        assert!(config.accepts(false));
    }
}
