//! PostgreSQL Repository Implementations

mod character_repository;
mod schema;

pub use character_repository::PgCharacterRepository;
pub use schema::ensure_schema;
