//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the registry and the command router
//! interact with external systems (storage, chat platform).
//!
//! Implementations of these traits live in the adapter crates.

pub mod integration;
pub mod repositories;

// Re-exports
pub use integration::*;
pub use repositories::*;
