//! Command Router
//!
//! Parses `!ar <command> <argument>` messages, runs the matching registry
//! operation and produces the replies to deliver.

mod delivery;
mod error;
mod message;
mod parser;
mod responses;
mod router;

pub use delivery::deliver;
pub use error::CommandError;
pub use crate::domain::FileAttachment;
pub use message::{InboundMessage, Reply};
pub use parser::{append_attachments, extract_name_and_profile, parse_command, Command, CommandKind};
pub use router::CommandRouter;
