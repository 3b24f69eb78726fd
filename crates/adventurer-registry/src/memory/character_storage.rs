//! Name-keyed volatile character storage

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::errors::DomainError;

/// Volatile name -> profile map.
///
/// Unlike [`CharacterRepository`](crate::ports::CharacterRepository) there is
/// no guild or author scoping, and `delete` of an unknown name is an error.
/// Mutations hold the write lock across the existence check and the write.
#[derive(Debug, Default)]
pub struct CharacterStorage {
    characters: RwLock<HashMap<String, String>>,
}

impl CharacterStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all stored characters, in no particular order
    pub fn names(&self) -> Vec<String> {
        self.characters.read().keys().cloned().collect()
    }

    /// Find a character's content by name
    pub fn find(&self, name: &str) -> Result<String, DomainError> {
        self.characters
            .read()
            .get(name)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    /// Store a new character, returning its name
    pub fn create(&self, name: &str, content: &str) -> Result<String, DomainError> {
        let mut characters = self.characters.write();
        if characters.contains_key(name) {
            return Err(DomainError::AlreadyExists);
        }

        characters.insert(name.to_string(), content.to_string());
        Ok(name.to_string())
    }

    /// Replace an existing character's content, returning its name
    pub fn update(&self, name: &str, content: &str) -> Result<String, DomainError> {
        let mut characters = self.characters.write();
        let slot = characters.get_mut(name).ok_or(DomainError::NotFound)?;
        *slot = content.to_string();
        Ok(name.to_string())
    }

    /// Remove a character by name
    pub fn delete(&self, name: &str) -> Result<(), DomainError> {
        self.characters
            .write()
            .remove(name)
            .map(|_| ())
            .ok_or(DomainError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_create_then_find() {
        let storage = CharacterStorage::new();
        let name = storage.create("Thundar", "A brave knight").unwrap();

        assert_eq!(name, "Thundar");
        assert_eq!(storage.find("Thundar").unwrap(), "A brave knight");
        assert_eq!(storage.names(), vec!["Thundar".to_string()]);
    }

    #[test]
    fn test_create_duplicate_keeps_original() {
        let storage = CharacterStorage::new();
        storage.create("Thundar", "A brave knight").unwrap();

        let err = storage.create("Thundar", "An impostor").unwrap_err();
        assert!(matches!(err, DomainError::AlreadyExists));
        assert_eq!(storage.find("Thundar").unwrap(), "A brave knight");
    }

    #[test]
    fn test_update_missing_fails() {
        let storage = CharacterStorage::new();
        let err = storage.update("Nobody", "content").unwrap_err();

        assert!(matches!(err, DomainError::NotFound));
        assert!(storage.names().is_empty());
    }

    #[test]
    fn test_update_replaces_content() {
        let storage = CharacterStorage::new();
        storage.create("Thundar", "A brave knight").unwrap();
        storage.update("Thundar", "A retired knight").unwrap();

        assert_eq!(storage.find("Thundar").unwrap(), "A retired knight");
    }

    #[test]
    fn test_delete_missing_fails() {
        let storage = CharacterStorage::new();
        assert!(matches!(
            storage.delete("Nobody").unwrap_err(),
            DomainError::NotFound
        ));
    }

    #[test]
    fn test_delete_removes() {
        let storage = CharacterStorage::new();
        storage.create("Thundar", "A brave knight").unwrap();
        storage.delete("Thundar").unwrap();

        assert!(matches!(
            storage.find("Thundar").unwrap_err(),
            DomainError::NotFound
        ));
    }

    #[test]
    fn test_concurrent_creates_admit_exactly_one() {
        let storage = Arc::new(CharacterStorage::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let storage = Arc::clone(&storage);
                std::thread::spawn(move || storage.create("Thundar", &format!("version {i}")))
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(storage.names().len(), 1);
    }
}
