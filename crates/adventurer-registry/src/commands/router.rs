//! Command dispatch

use std::sync::Arc;

use tracing::{debug, error, info};

use super::error::CommandError;
use super::message::{InboundMessage, Reply};
use super::parser::{append_attachments, extract_name_and_profile, parse_command, Command, CommandKind};
use super::responses;
use crate::domain::{errors::DomainError, FileAttachment, NewCharacter};
use crate::ports::CharacterRepository;

const EXPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Stateless dispatcher from chat commands to registry operations
pub struct CommandRouter<R: CharacterRepository + ?Sized> {
    repo: Arc<R>,
    prefix: String,
}

impl<R: CharacterRepository + ?Sized> CommandRouter<R> {
    pub fn new(repo: Arc<R>, prefix: impl Into<String>) -> Self {
        Self {
            repo,
            prefix: prefix.into(),
        }
    }

    /// The command prefix token, e.g. `!ar`
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Handle one inbound message.
    ///
    /// Returns the replies to deliver; an empty vector means the message was
    /// ignored. Internal failures are logged and answered with a generic
    /// public reply.
    pub async fn route(&self, message: &InboundMessage) -> Vec<Reply> {
        if message.author_is_self || message.author_is_bot {
            return Vec::new();
        }

        let Some(command) = parse_command(&self.prefix, &message.content) else {
            return Vec::new();
        };

        debug!(
            command = %command.kind,
            word = %command.word,
            author_id = %message.author_id,
            guild_id = %message.guild_scope(),
            is_direct = message.is_direct,
            "Dispatching command"
        );

        match self.dispatch(&command, message).await {
            Ok(replies) => replies,
            Err(e) if e.is_user_facing() => vec![Reply::Public(e.to_string())],
            Err(e) => {
                error!(
                    error = %e,
                    command = %command.kind,
                    author_id = %message.author_id,
                    "Command failed"
                );
                vec![Reply::Public(responses::GENERIC_FAILURE.to_string())]
            }
        }
    }

    async fn dispatch(
        &self,
        command: &Command,
        message: &InboundMessage,
    ) -> Result<Vec<Reply>, CommandError> {
        match command.kind {
            CommandKind::List => self.handle_list(message).await,
            CommandKind::Register => self.handle_register(&command.argument, message).await,
            CommandKind::Unregister => self.handle_unregister(&command.argument, message).await,
            CommandKind::Update => self.handle_update(&command.argument, message).await,
            CommandKind::Character => self.handle_character(&command.argument, message).await,
            CommandKind::Export => self.handle_export(message).await,
            CommandKind::Help => Ok(vec![Reply::Public(responses::help(&self.prefix))]),
        }
    }

    async fn handle_list(&self, message: &InboundMessage) -> Result<Vec<Reply>, CommandError> {
        let characters = if message.is_direct {
            self.repo.list_by_author(&message.author_id).await?
        } else {
            self.repo.list_by_guild(message.guild_scope()).await?
        };

        if characters.is_empty() {
            return Ok(vec![Reply::Public(responses::empty_list(&self.prefix))]);
        }

        Ok(vec![Reply::Private(responses::character_list(&characters))])
    }

    async fn handle_register(
        &self,
        argument: &str,
        message: &InboundMessage,
    ) -> Result<Vec<Reply>, CommandError> {
        let (name, profile) = extract_name_and_profile(argument)
            .map_err(|_| CommandError::Format(responses::register_usage(&self.prefix)))?;

        let character = self
            .repo
            .create(NewCharacter::new(
                &message.author_id,
                message.guild_scope(),
                name,
                append_attachments(&profile, &message.attachments),
            ))
            .await?;

        info!(
            name = %character.name,
            guild_id = %character.guild_id,
            author_id = %character.author_id,
            "Registered character"
        );

        Ok(vec![Reply::Public(responses::registered(&character.name))])
    }

    async fn handle_unregister(
        &self,
        argument: &str,
        message: &InboundMessage,
    ) -> Result<Vec<Reply>, CommandError> {
        let name = argument.trim();
        if name.is_empty() {
            return Err(CommandError::Format(responses::unregister_usage(&self.prefix)));
        }

        if message.is_direct {
            self.repo.delete_by_author(name, &message.author_id).await?;
        } else {
            self.repo
                .delete(name, message.guild_scope(), &message.author_id)
                .await?;
        }

        info!(
            name = %name,
            guild_id = %message.guild_scope(),
            author_id = %message.author_id,
            "Unregistered character"
        );

        Ok(vec![Reply::Public(responses::unregistered(name))])
    }

    async fn handle_update(
        &self,
        argument: &str,
        message: &InboundMessage,
    ) -> Result<Vec<Reply>, CommandError> {
        let (name, profile) = extract_name_and_profile(argument)
            .map_err(|_| CommandError::Format(responses::update_usage(&self.prefix)))?;

        let character = self
            .repo
            .update(
                &name,
                &append_attachments(&profile, &message.attachments),
                message.guild_scope(),
            )
            .await?;

        info!(
            name = %character.name,
            guild_id = %character.guild_id,
            "Updated character"
        );

        Ok(vec![Reply::Public(responses::updated(&name))])
    }

    async fn handle_character(
        &self,
        argument: &str,
        message: &InboundMessage,
    ) -> Result<Vec<Reply>, CommandError> {
        let name = argument.trim();
        if name.is_empty() {
            return Err(CommandError::Format(responses::character_usage(&self.prefix)));
        }

        let found = if message.is_direct {
            self.repo
                .find_by_name_and_author(name, &message.author_id)
                .await
        } else {
            self.repo
                .find_by_name_and_guild(name, message.guild_scope())
                .await
        };

        match found {
            Ok(character) => Ok(vec![Reply::Private(responses::character_profile(
                &character,
            ))]),
            Err(DomainError::NotFound) => {
                Ok(vec![Reply::Public(responses::no_such_character(name))])
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn handle_export(&self, message: &InboundMessage) -> Result<Vec<Reply>, CommandError> {
        let characters = self.repo.list_by_author(&message.author_id).await?;

        if characters.is_empty() {
            return Ok(vec![Reply::Private(
                responses::NO_EXPORTABLE_CHARACTERS.to_string(),
            )]);
        }

        debug!(
            author_id = %message.author_id,
            count = characters.len(),
            "Exporting characters"
        );

        Ok(vec![Reply::PrivateFile(FileAttachment {
            filename: responses::export_filename(&message.author_name),
            content_type: EXPORT_CONTENT_TYPE.to_string(),
            content: responses::export_document(&characters).into_bytes(),
        })])
    }
}
