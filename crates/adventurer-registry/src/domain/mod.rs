//! Domain Layer
//!
//! Pure domain types shared between the command router and the registries.

pub mod entities;
pub mod errors;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
