//! Chat Platform Integration Port
//!
//! Abstract interface for the messaging platform that delivers the bot's
//! replies (Discord, or a recording fake in tests).

use async_trait::async_trait;

use crate::domain::{errors::DomainError, FileAttachment};

/// Platform integration interface
///
/// # Example
///
/// ```rust,ignore
/// use adventurer_registry::ports::ChatIntegration;
///
/// struct DiscordClient { /* ... */ }
///
/// #[async_trait]
/// impl ChatIntegration for DiscordClient {
///     async fn send_message(&self, channel_id: &str, content: &str) -> Result<(), DomainError> {
///         // Post to the channel
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait ChatIntegration: Send + Sync {
    /// Send a text message to a channel
    async fn send_message(&self, channel_id: &str, content: &str) -> Result<(), DomainError>;

    /// Open (or resolve) the direct channel with a user, returning its id
    async fn open_direct_channel(&self, user_id: &str) -> Result<String, DomainError>;

    /// Send a file attachment to a channel
    async fn send_file(
        &self,
        channel_id: &str,
        attachment: &FileAttachment,
    ) -> Result<(), DomainError>;

    /// Get the integration name (e.g., "discord")
    fn name(&self) -> &str;

    /// Check if the integration is connected and healthy
    async fn health_check(&self) -> Result<bool, DomainError> {
        Ok(true)
    }
}
