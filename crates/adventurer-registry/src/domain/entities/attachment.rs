//! File attachments sent to users

use serde::{Deserialize, Serialize};

/// File sent as a message attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}
