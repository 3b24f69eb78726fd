//! PostgreSQL implementation of CharacterRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use adventurer_registry::domain::validate_fields;
use adventurer_registry::{Character, CharacterRepository, DomainError, NewCharacter};

/// PostgreSQL implementation of CharacterRepository
///
/// Concurrency control is left to Postgres: every write is a single
/// conditional statement, and a unique violation on `(guild_id, name)` is
/// reported as [`DomainError::AlreadyExists`].
#[derive(Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the table and indexes if they do not exist
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        super::ensure_schema(&self.pool).await
    }

    async fn fetch_by_name_and_guild(
        &self,
        name: &str,
        guild_id: &str,
    ) -> Result<Option<Character>, DomainError> {
        let row = sqlx::query_as::<_, CharacterRow>(
            "SELECT * FROM characters WHERE name = $1 AND guild_id = $2 LIMIT 1",
        )
        .bind(name)
        .bind(guild_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn fetch_by_name_and_author(
        &self,
        name: &str,
        author_id: &str,
    ) -> Result<Option<Character>, DomainError> {
        let row = sqlx::query_as::<_, CharacterRow>(
            "SELECT * FROM characters WHERE name = $1 AND author_id = $2 ORDER BY created_at LIMIT 1",
        )
        .bind(name)
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CharacterRow {
    author_id: String,
    guild_id: String,
    name: String,
    profile: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        Self {
            author_id: row.author_id,
            guild_id: row.guild_id,
            name: row.name,
            profile: row.profile,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

fn repository_error(e: sqlx::Error) -> DomainError {
    if is_unique_violation(&e) {
        return DomainError::AlreadyExists;
    }
    DomainError::Repository(e.to_string())
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    async fn list_by_guild(&self, guild_id: &str) -> Result<Vec<Character>, DomainError> {
        let rows = sqlx::query_as::<_, CharacterRow>(
            "SELECT * FROM characters WHERE guild_id = $1 ORDER BY name",
        )
        .bind(guild_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_author(&self, author_id: &str) -> Result<Vec<Character>, DomainError> {
        let rows = sqlx::query_as::<_, CharacterRow>(
            "SELECT * FROM characters WHERE author_id = $1 ORDER BY name",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_name_and_guild(
        &self,
        name: &str,
        guild_id: &str,
    ) -> Result<Character, DomainError> {
        self.fetch_by_name_and_guild(name, guild_id)
            .await?
            .ok_or(DomainError::NotFound)
    }

    async fn find_by_name_and_author(
        &self,
        name: &str,
        author_id: &str,
    ) -> Result<Character, DomainError> {
        self.fetch_by_name_and_author(name, author_id)
            .await?
            .ok_or(DomainError::NotFound)
    }

    async fn create(&self, character: NewCharacter) -> Result<Character, DomainError> {
        character.validate()?;

        if self
            .fetch_by_name_and_guild(&character.name, &character.guild_id)
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyExists);
        }

        // A concurrent insert that won the race yields no row
        let row = sqlx::query_as::<_, CharacterRow>(
            r#"
            INSERT INTO characters (author_id, guild_id, name, profile)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (guild_id, name) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(&character.author_id)
        .bind(&character.guild_id)
        .bind(&character.name)
        .bind(&character.profile)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        let created: Character = row.map(Into::into).ok_or(DomainError::AlreadyExists)?;
        tracing::info!(
            name = %created.name,
            guild_id = %created.guild_id,
            "Inserted character row"
        );

        Ok(created)
    }

    async fn update(
        &self,
        name: &str,
        profile: &str,
        guild_id: &str,
    ) -> Result<Character, DomainError> {
        validate_fields(name, profile)?;

        let row = sqlx::query_as::<_, CharacterRow>(
            r#"
            UPDATE characters
            SET profile = $1,
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
            WHERE name = $2 AND guild_id = $3
            RETURNING *
            "#,
        )
        .bind(profile)
        .bind(name)
        .bind(guild_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        row.map(Into::into).ok_or(DomainError::NotFound)
    }

    async fn delete(
        &self,
        name: &str,
        guild_id: &str,
        requesting_author_id: &str,
    ) -> Result<(), DomainError> {
        let Some(existing) = self.fetch_by_name_and_guild(name, guild_id).await? else {
            return Ok(());
        };

        if !existing.is_owned_by(requesting_author_id) {
            return Err(DomainError::PermissionDenied);
        }

        let result = sqlx::query(
            "DELETE FROM characters WHERE name = $1 AND guild_id = $2 AND author_id = $3",
        )
        .bind(name)
        .bind(guild_id)
        .bind(requesting_author_id)
        .execute(&self.pool)
        .await
        .map_err(repository_error)?;

        tracing::info!(
            name = %name,
            guild_id = %guild_id,
            rows = result.rows_affected(),
            "Deleted character row"
        );

        Ok(())
    }

    async fn delete_by_author(&self, name: &str, author_id: &str) -> Result<(), DomainError> {
        let Some(existing) = self.fetch_by_name_and_author(name, author_id).await? else {
            return Ok(());
        };

        if !existing.is_owned_by(author_id) {
            return Err(DomainError::PermissionDenied);
        }

        let result = sqlx::query("DELETE FROM characters WHERE name = $1 AND author_id = $2")
            .bind(name)
            .bind(author_id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        tracing::info!(
            name = %name,
            author_id = %author_id,
            rows = result.rows_affected(),
            "Deleted character rows by author"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_maps_to_character() {
        let now = Utc::now();
        let character: Character = CharacterRow {
            author_id: "author-1".into(),
            guild_id: "guild-1".into(),
            name: "Thundar".into(),
            profile: "A brave knight".into(),
            created_at: now,
            updated_at: now,
        }
        .into();

        assert_eq!(character.name, "Thundar");
        assert_eq!(character.guild_id, "guild-1");
        assert_eq!(character.created_at, now);
    }

    #[test]
    fn test_non_database_errors_are_internal() {
        let err = repository_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Repository(_)));
        assert!(!err.is_user_facing());
    }
}
