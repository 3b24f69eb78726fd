//! Domain Entities
//!
//! - Character: a named text profile owned by an author within a guild
//! - FileAttachment: a file delivered to a user (character exports)

mod attachment;
mod character;

pub use attachment::*;
pub use character::*;
