//! Idempotent schema bootstrap

use sqlx::PgPool;
use tracing::info;

use adventurer_registry::DomainError;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        author_id VARCHAR(255) NOT NULL,
        guild_id VARCHAR(255) NOT NULL,
        name VARCHAR(255) NOT NULL CHECK (name <> ''),
        profile TEXT NOT NULL CHECK (profile <> ''),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    // Older deployments stored naive UTC timestamps
    r#"
    DO $$
    DECLARE
        col TEXT;
    BEGIN
        FOREACH col IN ARRAY ARRAY['created_at', 'updated_at'] LOOP
            IF EXISTS (
                SELECT 1 FROM information_schema.columns
                WHERE table_schema = current_schema()
                  AND table_name = 'characters'
                  AND column_name = col
                  AND data_type = 'timestamp without time zone'
            ) THEN
                EXECUTE format(
                    'ALTER TABLE characters ALTER COLUMN %I TYPE TIMESTAMPTZ USING %I AT TIME ZONE ''UTC''',
                    col, col
                );
            END IF;
        END LOOP;
    END
    $$
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_characters_guild_id_name ON characters (guild_id, name)",
    // An author may own many characters; older deployments created this index
    "DROP INDEX IF EXISTS ids_characters_author_id",
    "CREATE INDEX IF NOT EXISTS idx_characters_author_id_name ON characters (author_id, name)",
];

/// Create the `characters` table and its indexes if they do not exist, and
/// upgrade tables left behind by older deployments
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DomainError> {
    for statement in STATEMENTS {
        sqlx::raw_sql(statement)
            .execute(pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;
    }

    info!("Character schema ready");
    Ok(())
}
