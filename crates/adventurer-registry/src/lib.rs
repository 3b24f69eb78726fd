//! Adventurer Registry Domain Library
//!
//! Core types and interfaces for the Adventurer Registry chat bot, which lets
//! community members register, look up, update and export short character
//! profiles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): the `Character` entity and `DomainError`
//! - **Ports** (`ports/`): abstract interfaces
//!   - `repositories/`: character persistence
//!   - `integration`: the chat platform used to deliver replies
//! - **Memory** (`memory/`): in-process storage that needs no database
//! - **Commands** (`commands/`): prefix command parsing and dispatch
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use adventurer_registry::{CommandRouter, MemoryCharacterRepository};
//!
//! let router = CommandRouter::new(Arc::new(MemoryCharacterRepository::new()), "!ar");
//! let replies = router.route(&message).await;
//! ```

pub mod commands;
pub mod domain;
pub mod memory;
pub mod ports;

// Re-export commonly used types
pub use commands::{
    deliver, CommandError, CommandKind, CommandRouter, FileAttachment, InboundMessage, Reply,
};
pub use domain::{Character, DomainError, NewCharacter, DIRECT_MESSAGE_GUILD};
pub use memory::{CharacterStorage, MemoryCharacterRepository};
pub use ports::{CharacterRepository, ChatIntegration};
