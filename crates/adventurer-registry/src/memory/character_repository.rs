//! In-memory implementation of CharacterRepository

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use crate::domain::{errors::DomainError, validate_fields, Character, NewCharacter};
use crate::ports::CharacterRepository;

/// Guild- and author-scoped in-memory repository.
///
/// Honors the same contracts as the Postgres adapter. Each check-and-mutate
/// sequence runs under a single write guard.
#[derive(Debug, Default)]
pub struct MemoryCharacterRepository {
    characters: RwLock<Vec<Character>>,
}

impl MemoryCharacterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CharacterRepository for MemoryCharacterRepository {
    async fn list_by_guild(&self, guild_id: &str) -> Result<Vec<Character>, DomainError> {
        let characters = self.characters.read().await;
        Ok(characters
            .iter()
            .filter(|c| c.guild_id == guild_id)
            .cloned()
            .collect())
    }

    async fn list_by_author(&self, author_id: &str) -> Result<Vec<Character>, DomainError> {
        let characters = self.characters.read().await;
        Ok(characters
            .iter()
            .filter(|c| c.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn find_by_name_and_guild(
        &self,
        name: &str,
        guild_id: &str,
    ) -> Result<Character, DomainError> {
        let characters = self.characters.read().await;
        characters
            .iter()
            .find(|c| c.name == name && c.guild_id == guild_id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    async fn find_by_name_and_author(
        &self,
        name: &str,
        author_id: &str,
    ) -> Result<Character, DomainError> {
        let characters = self.characters.read().await;
        characters
            .iter()
            .find(|c| c.name == name && c.author_id == author_id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    async fn create(&self, character: NewCharacter) -> Result<Character, DomainError> {
        character.validate()?;

        let mut characters = self.characters.write().await;
        if characters
            .iter()
            .any(|c| c.name == character.name && c.guild_id == character.guild_id)
        {
            return Err(DomainError::AlreadyExists);
        }

        let stored = character.into_character(Utc::now());
        characters.push(stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        name: &str,
        profile: &str,
        guild_id: &str,
    ) -> Result<Character, DomainError> {
        validate_fields(name, profile)?;

        let mut characters = self.characters.write().await;
        let character = characters
            .iter_mut()
            .find(|c| c.name == name && c.guild_id == guild_id)
            .ok_or(DomainError::NotFound)?;

        // updated_at must advance even when the clock has not
        let floor = character.updated_at + Duration::microseconds(1);
        character.profile = profile.to_string();
        character.updated_at = Utc::now().max(floor);
        Ok(character.clone())
    }

    async fn delete(
        &self,
        name: &str,
        guild_id: &str,
        requesting_author_id: &str,
    ) -> Result<(), DomainError> {
        let mut characters = self.characters.write().await;
        let Some(index) = characters
            .iter()
            .position(|c| c.name == name && c.guild_id == guild_id)
        else {
            return Ok(());
        };

        if !characters[index].is_owned_by(requesting_author_id) {
            return Err(DomainError::PermissionDenied);
        }

        characters.remove(index);
        Ok(())
    }

    async fn delete_by_author(&self, name: &str, author_id: &str) -> Result<(), DomainError> {
        let mut characters = self.characters.write().await;
        characters.retain(|c| !(c.name == name && c.author_id == author_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thundar(guild_id: &str) -> NewCharacter {
        NewCharacter::new("author-1", guild_id, "Thundar", "A brave knight")
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = MemoryCharacterRepository::new();
        repo.create(thundar("guild-1")).await.unwrap();

        let found = repo
            .find_by_name_and_guild("Thundar", "guild-1")
            .await
            .unwrap();
        assert_eq!(found.name, "Thundar");
        assert_eq!(found.guild_id, "guild-1");
        assert!(!found.profile.is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_in_guild_fails() {
        let repo = MemoryCharacterRepository::new();
        repo.create(thundar("guild-1")).await.unwrap();

        let err = repo
            .create(NewCharacter::new("author-2", "guild-1", "Thundar", "Impostor"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::AlreadyExists));

        let original = repo
            .find_by_name_and_guild("Thundar", "guild-1")
            .await
            .unwrap();
        assert_eq!(original.profile, "A brave knight");
    }

    #[tokio::test]
    async fn test_same_name_in_other_guild_is_allowed() {
        let repo = MemoryCharacterRepository::new();
        repo.create(thundar("guild-1")).await.unwrap();
        repo.create(thundar("guild-2")).await.unwrap();

        assert_eq!(repo.list_by_author("author-1").await.unwrap().len(), 2);
        assert_eq!(repo.list_by_guild("guild-2").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let repo = MemoryCharacterRepository::new();
        let err = repo
            .update("Thundar", "new profile", "guild-1")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound));
        assert!(repo.list_by_guild("guild-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_fields_are_rejected() {
        let repo = MemoryCharacterRepository::new();

        let err = repo
            .create(NewCharacter::new("author-1", "guild-1", "", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCharacter));
        assert!(err.is_user_facing());

        repo.create(thundar("guild-1")).await.unwrap();
        let err = repo.update("Thundar", "   ", "guild-1").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidCharacter));

        let stored = repo
            .find_by_name_and_guild("Thundar", "guild-1")
            .await
            .unwrap();
        assert_eq!(stored.profile, "A brave knight");
        assert_eq!(repo.list_by_guild("guild-1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_advances_updated_at() {
        let repo = MemoryCharacterRepository::new();
        let created = repo.create(thundar("guild-1")).await.unwrap();

        let updated = repo
            .update("Thundar", "A retired knight", "guild-1")
            .await
            .unwrap();
        assert_eq!(updated.profile, "A retired knight");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let repo = MemoryCharacterRepository::new();
        repo.delete("Thundar", "guild-1", "author-1").await.unwrap();
        repo.delete_by_author("Thundar", "author-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_by_other_author_is_denied() {
        let repo = MemoryCharacterRepository::new();
        repo.create(thundar("guild-1")).await.unwrap();

        let err = repo
            .delete("Thundar", "guild-1", "author-2")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PermissionDenied));
        assert!(repo
            .find_by_name_and_guild("Thundar", "guild-1")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_delete_by_owner_removes() {
        let repo = MemoryCharacterRepository::new();
        repo.create(thundar("guild-1")).await.unwrap();
        repo.delete("Thundar", "guild-1", "author-1").await.unwrap();

        assert!(matches!(
            repo.find_by_name_and_guild("Thundar", "guild-1")
                .await
                .unwrap_err(),
            DomainError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_delete_by_author_spares_other_authors() {
        let repo = MemoryCharacterRepository::new();
        repo.create(thundar("guild-1")).await.unwrap();
        repo.create(NewCharacter::new("author-2", "guild-2", "Thundar", "Other"))
            .await
            .unwrap();

        repo.delete_by_author("Thundar", "author-1").await.unwrap();

        assert!(repo.list_by_author("author-1").await.unwrap().is_empty());
        assert_eq!(repo.list_by_author("author-2").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_lists_are_not_errors() {
        let repo = MemoryCharacterRepository::new();
        assert!(repo.list_by_guild("guild-1").await.unwrap().is_empty());
        assert!(repo.list_by_author("author-1").await.unwrap().is_empty());
    }
}
