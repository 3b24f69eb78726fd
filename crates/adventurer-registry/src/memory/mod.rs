//! In-process storage
//!
//! Volatile registries for tests and deployments that do not need
//! durability. Nothing here survives a restart.

mod character_repository;
mod character_storage;

pub use character_repository::MemoryCharacterRepository;
pub use character_storage::CharacterStorage;
