//! Character Repository Port
//!
//! Abstract interface for character persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Character, NewCharacter};

/// Repository interface for Character entities
///
/// Implementations never surface a storage "no rows" condition as an error:
/// list operations return an empty vector and lookups return
/// [`DomainError::NotFound`]. Callers receive owned copies of the records.
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// All characters registered in a guild
    async fn list_by_guild(&self, guild_id: &str) -> Result<Vec<Character>, DomainError>;

    /// All characters created by an author, across guilds
    async fn list_by_author(&self, author_id: &str) -> Result<Vec<Character>, DomainError>;

    /// Find a character by name within a guild
    async fn find_by_name_and_guild(
        &self,
        name: &str,
        guild_id: &str,
    ) -> Result<Character, DomainError>;

    /// Find a character by name among an author's characters
    async fn find_by_name_and_author(
        &self,
        name: &str,
        author_id: &str,
    ) -> Result<Character, DomainError>;

    /// Register a new character.
    ///
    /// Fails with [`DomainError::AlreadyExists`] when `(guild_id, name)` is
    /// taken. Returns the stored record, timestamps included.
    async fn create(&self, character: NewCharacter) -> Result<Character, DomainError>;

    /// Rewrite a character's profile and refresh `updated_at`.
    ///
    /// Fails with [`DomainError::NotFound`] when `(guild_id, name)` is unknown.
    async fn update(
        &self,
        name: &str,
        profile: &str,
        guild_id: &str,
    ) -> Result<Character, DomainError>;

    /// Delete a character within a guild.
    ///
    /// Succeeds without effect when the character does not exist. Fails with
    /// [`DomainError::PermissionDenied`] when it is owned by someone other
    /// than `requesting_author_id`.
    async fn delete(
        &self,
        name: &str,
        guild_id: &str,
        requesting_author_id: &str,
    ) -> Result<(), DomainError>;

    /// Delete an author's character by name, across guilds.
    ///
    /// Succeeds without effect when the author has no character by that name.
    async fn delete_by_author(&self, name: &str, author_id: &str) -> Result<(), DomainError>;
}
