//! Reply delivery through a chat integration

use tracing::{debug, error};

use super::message::{InboundMessage, Reply};
use crate::domain::errors::DomainError;
use crate::ports::ChatIntegration;

/// Deliver replies for `message`.
///
/// Public replies go to the message's channel, private ones to the author's
/// direct channel. A failed delivery is logged and the remaining replies are
/// still attempted. Returns the number of replies delivered.
pub async fn deliver<I: ChatIntegration + ?Sized>(
    integration: &I,
    message: &InboundMessage,
    replies: &[Reply],
) -> usize {
    let mut delivered = 0;

    for reply in replies {
        match deliver_one(integration, message, reply).await {
            Ok(()) => delivered += 1,
            Err(e) => error!(
                error = %e,
                integration = %integration.name(),
                author_id = %message.author_id,
                channel_id = %message.channel_id,
                "Failed to deliver reply"
            ),
        }
    }

    debug!(delivered, total = replies.len(), "Replies delivered");
    delivered
}

async fn deliver_one<I: ChatIntegration + ?Sized>(
    integration: &I,
    message: &InboundMessage,
    reply: &Reply,
) -> Result<(), DomainError> {
    match reply {
        Reply::Public(content) => integration.send_message(&message.channel_id, content).await,
        Reply::Private(content) => {
            let channel_id = integration.open_direct_channel(&message.author_id).await?;
            integration.send_message(&channel_id, content).await
        }
        Reply::PrivateFile(attachment) => {
            let channel_id = integration.open_direct_channel(&message.author_id).await?;
            integration.send_file(&channel_id, attachment).await
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::*;
    use crate::commands::FileAttachment;

    #[derive(Default)]
    struct RecordingIntegration {
        sent: Mutex<Vec<(String, String)>>,
        files: Mutex<Vec<(String, String)>>,
        fail_direct: bool,
    }

    #[async_trait]
    impl ChatIntegration for RecordingIntegration {
        async fn send_message(&self, channel_id: &str, content: &str) -> Result<(), DomainError> {
            self.sent
                .lock()
                .push((channel_id.to_string(), content.to_string()));
            Ok(())
        }

        async fn open_direct_channel(&self, user_id: &str) -> Result<String, DomainError> {
            if self.fail_direct {
                return Err(DomainError::ExternalService("DMs disabled".into()));
            }
            Ok(format!("dm-{user_id}"))
        }

        async fn send_file(
            &self,
            channel_id: &str,
            attachment: &FileAttachment,
        ) -> Result<(), DomainError> {
            self.files
                .lock()
                .push((channel_id.to_string(), attachment.filename.clone()));
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn message() -> InboundMessage {
        InboundMessage {
            author_id: "author-1".to_string(),
            channel_id: "channel-1".to_string(),
            guild_id: Some("guild-1".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_routes_public_and_private() {
        let integration = RecordingIntegration::default();
        let replies = vec![
            Reply::Public("hello channel".to_string()),
            Reply::Private("hello author".to_string()),
            Reply::PrivateFile(FileAttachment {
                filename: "export.txt".to_string(),
                content_type: "text/plain".to_string(),
                content: b"data".to_vec(),
            }),
        ];

        let delivered = deliver(&integration, &message(), &replies).await;

        assert_eq!(delivered, 3);
        assert_eq!(
            *integration.sent.lock(),
            vec![
                ("channel-1".to_string(), "hello channel".to_string()),
                ("dm-author-1".to_string(), "hello author".to_string()),
            ]
        );
        assert_eq!(
            *integration.files.lock(),
            vec![("dm-author-1".to_string(), "export.txt".to_string())]
        );
    }

    #[tokio::test]
    async fn test_failed_private_reply_does_not_block_others() {
        let integration = RecordingIntegration {
            fail_direct: true,
            ..Default::default()
        };
        let replies = vec![
            Reply::Private("secret".to_string()),
            Reply::Public("still sent".to_string()),
        ];

        let delivered = deliver(&integration, &message(), &replies).await;

        assert_eq!(delivered, 1);
        assert_eq!(integration.sent.lock().len(), 1);
    }
}
