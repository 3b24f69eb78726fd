//! Discord API client wrapper

use std::num::NonZeroU64;
use std::sync::Arc;

use async_trait::async_trait;
use serenity::builder::{CreateAttachment, CreateMessage};
use serenity::http::Http;
use serenity::model::id::{ChannelId, UserId};
use tracing::{debug, error, warn};

use adventurer_registry::{ChatIntegration, DomainError, FileAttachment};

use crate::config::DiscordConfig;

/// Discord API client
pub struct DiscordClient {
    http: Arc<Http>,
}

impl DiscordClient {
    /// Create a new Discord client
    pub fn new(config: &DiscordConfig) -> Self {
        Self::from_http(Arc::new(Http::new(&config.token)))
    }

    /// Wrap an existing HTTP client (e.g. the gateway context's)
    pub fn from_http(http: Arc<Http>) -> Self {
        Self { http }
    }
}

fn parse_snowflake(kind: &str, id: &str) -> Result<NonZeroU64, DomainError> {
    id.parse::<NonZeroU64>()
        .map_err(|e| DomainError::ExternalService(format!("Invalid Discord {} id '{}': {}", kind, id, e)))
}

fn discord_error(e: serenity::Error) -> DomainError {
    DomainError::ExternalService(format!("Discord API error: {}", e))
}

#[async_trait]
impl ChatIntegration for DiscordClient {
    async fn send_message(&self, channel_id: &str, content: &str) -> Result<(), DomainError> {
        let channel = ChannelId::from(parse_snowflake("channel", channel_id)?);
        debug!(channel_id = %channel_id, content_len = %content.len(), "Sending message to Discord");

        channel
            .say(&self.http, content)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send Discord message"))
            .map_err(discord_error)?;

        Ok(())
    }

    async fn open_direct_channel(&self, user_id: &str) -> Result<String, DomainError> {
        let user = UserId::from(parse_snowflake("user", user_id)?);
        debug!(user_id = %user_id, "Opening Discord DM channel");

        let channel = user
            .create_dm_channel(&self.http)
            .await
            .map_err(discord_error)?;

        Ok(channel.id.to_string())
    }

    async fn send_file(
        &self,
        channel_id: &str,
        attachment: &FileAttachment,
    ) -> Result<(), DomainError> {
        let channel = ChannelId::from(parse_snowflake("channel", channel_id)?);
        debug!(
            channel_id = %channel_id,
            filename = %attachment.filename,
            content_type = %attachment.content_type,
            size = attachment.content.len(),
            "Sending file to Discord"
        );

        // Discord infers the content type from the file name
        let file = CreateAttachment::bytes(attachment.content.clone(), attachment.filename.clone());

        channel
            .send_message(&self.http, CreateMessage::new().add_file(file))
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send Discord file"))
            .map_err(discord_error)?;

        Ok(())
    }

    fn name(&self) -> &str {
        "discord"
    }

    async fn health_check(&self) -> Result<bool, DomainError> {
        // Try to get current user to verify connection
        match self.http.get_current_user().await {
            Ok(_) => Ok(true),
            Err(e) => {
                warn!(error = %e, "Discord health check failed");
                Ok(false)
            }
        }
    }
}
