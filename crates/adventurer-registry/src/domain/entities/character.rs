//! Character - a registered adventurer profile
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Guild id used for characters registered in a direct message with the bot.
pub const DIRECT_MESSAGE_GUILD: &str = "";

/// A registered character.
///
/// `(guild_id, name)` is unique across the registry. An author may own any
/// number of characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub author_id: String,
    /// Empty for characters registered in a direct message
    pub guild_id: String,
    pub name: String,
    pub profile: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for registering a character; timestamps are assigned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCharacter {
    pub author_id: String,
    pub guild_id: String,
    pub name: String,
    pub profile: String,
}

impl NewCharacter {
    pub fn new(
        author_id: impl Into<String>,
        guild_id: impl Into<String>,
        name: impl Into<String>,
        profile: impl Into<String>,
    ) -> Self {
        Self {
            author_id: author_id.into(),
            guild_id: guild_id.into(),
            name: name.into(),
            profile: profile.into(),
        }
    }

    /// Reject blank names or profiles
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(&self.name, &self.profile)
    }

    /// Materialize the record with both timestamps set to `now`
    pub fn into_character(self, now: DateTime<Utc>) -> Character {
        Character {
            author_id: self.author_id,
            guild_id: self.guild_id,
            name: self.name,
            profile: self.profile,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Name and profile must both contain something other than whitespace
pub fn validate_fields(name: &str, profile: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() || profile.trim().is_empty() {
        return Err(DomainError::InvalidCharacter);
    }
    Ok(())
}

impl Character {
    /// Whether `author_id` owns this character
    pub fn is_owned_by(&self, author_id: &str) -> bool {
        self.author_id == author_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_character_sets_both_timestamps() {
        let now = Utc::now();
        let character = NewCharacter::new("author", "guild", "Thundar", "A brave knight")
            .into_character(now);

        assert_eq!(character.created_at, now);
        assert_eq!(character.updated_at, now);
        assert!(character.is_owned_by("author"));
        assert!(!character.is_owned_by("someone-else"));
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert!(NewCharacter::new("author", "guild", "Thundar", "Knight")
            .validate()
            .is_ok());
        assert!(matches!(
            NewCharacter::new("author", "guild", "", "Knight").validate(),
            Err(DomainError::InvalidCharacter)
        ));
        assert!(matches!(
            validate_fields("Thundar", " \n "),
            Err(DomainError::InvalidCharacter)
        ));
    }
}
