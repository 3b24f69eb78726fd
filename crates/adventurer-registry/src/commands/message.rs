//! Inbound messages and outbound replies

use serde::{Deserialize, Serialize};

use crate::domain::FileAttachment;

/// A chat message as seen by the router, stripped of platform specifics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboundMessage {
    pub author_id: String,
    pub author_name: String,
    /// Author is an automated account
    pub author_is_bot: bool,
    /// Author is this bot
    pub author_is_self: bool,
    /// `None` in direct messages
    pub guild_id: Option<String>,
    pub channel_id: String,
    pub content: String,
    /// Attachment URLs, in the order they were attached
    pub attachments: Vec<String>,
    /// Sent in the author's one-to-one channel with the bot
    pub is_direct: bool,
}

impl InboundMessage {
    /// Guild scope for registry calls; direct messages map to the DM scope
    pub fn guild_scope(&self) -> &str {
        self.guild_id
            .as_deref()
            .unwrap_or(crate::domain::DIRECT_MESSAGE_GUILD)
    }
}

/// A reply produced by a command handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "body", rename_all = "snake_case")]
pub enum Reply {
    /// Posted in the channel the command came from
    Public(String),
    /// Sent to the author's direct channel
    Private(String),
    /// File sent to the author's direct channel
    PrivateFile(FileAttachment),
}
