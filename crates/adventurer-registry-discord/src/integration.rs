//! Gateway event handler that feeds the command router

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use serenity::client::{Client, Context, EventHandler};
use serenity::model::channel::Message as SerenityMessage;
use serenity::model::gateway::{GatewayIntents, Ready};
use serenity::model::id::UserId;
use tracing::{debug, info};

use adventurer_registry::{deliver, CharacterRepository, CommandRouter, InboundMessage};

use crate::client::DiscordClient;
use crate::config::DiscordConfig;

/// Discord integration driving a [`CommandRouter`]
pub struct DiscordIntegration<R: CharacterRepository + ?Sized> {
    router: Arc<CommandRouter<R>>,
    client: DiscordClient,
    config: DiscordConfig,
    bot_user_id: OnceLock<UserId>,
}

impl<R: CharacterRepository + ?Sized + 'static> DiscordIntegration<R> {
    /// Create a new Discord integration
    pub fn new(config: DiscordConfig, router: Arc<CommandRouter<R>>) -> Self {
        let client = DiscordClient::new(&config);
        Self {
            router,
            client,
            config,
            bot_user_id: OnceLock::new(),
        }
    }

    /// Gateway intents needed to read commands in guilds and DMs
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }

    /// Build a serenity client with this integration as its event handler
    pub async fn into_client(self) -> Result<Client, serenity::Error> {
        let token = self.config.token.clone();
        Client::builder(&token, Self::intents())
            .event_handler(self)
            .await
    }

    /// Convert serenity Message to the router's message type
    fn convert_message(&self, msg: &SerenityMessage) -> InboundMessage {
        let author_is_self = self
            .bot_user_id
            .get()
            .is_some_and(|id| *id == msg.author.id);

        InboundMessage {
            author_id: msg.author.id.to_string(),
            author_name: msg.author.name.clone(),
            author_is_bot: msg.author.bot,
            author_is_self,
            guild_id: msg.guild_id.map(|g| g.to_string()),
            channel_id: msg.channel_id.to_string(),
            content: msg.content.clone(),
            attachments: msg.attachments.iter().map(|a| a.proxy_url.clone()).collect(),
            is_direct: msg.guild_id.is_none(),
        }
    }
}

#[async_trait]
impl<R: CharacterRepository + ?Sized + 'static> EventHandler for DiscordIntegration<R> {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        // First READY wins; reconnects report the same user
        let _ = self.bot_user_id.set(ready.user.id);
        info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            prefix = %self.router.prefix(),
            "Discord connection ready"
        );
    }

    async fn message(&self, _ctx: Context, msg: SerenityMessage) {
        let inbound = self.convert_message(&msg);
        if !self.config.accepts(inbound.is_direct) {
            debug!(channel_id = %inbound.channel_id, "Ignoring message from disabled channel kind");
            return;
        }

        let replies = self.router.route(&inbound).await;
        if replies.is_empty() {
            return;
        }

        deliver(&self.client, &inbound, &replies).await;
    }
}

#[cfg(test)]
mod tests {
    use adventurer_registry::MemoryCharacterRepository;

    use super::*;

    #[test]
    fn test_intents_include_message_content() {
        let intents = DiscordIntegration::<MemoryCharacterRepository>::intents();
        assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(intents.contains(GatewayIntents::GUILD_MESSAGES));
        assert!(intents.contains(GatewayIntents::DIRECT_MESSAGES));
    }

    #[test]
    fn test_new_keeps_router_prefix() {
        let router = Arc::new(CommandRouter::new(
            Arc::new(MemoryCharacterRepository::new()),
            "!ar",
        ));
        let integration = DiscordIntegration::new(DiscordConfig::new("test-token"), router);

        assert_eq!(integration.router.prefix(), "!ar");
        assert!(integration.bot_user_id.get().is_none());
    }
}
