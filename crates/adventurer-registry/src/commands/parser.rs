//! Command-line parsing for prefixed chat messages

use std::fmt;

use super::error::CommandError;

/// Commands understood by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    List,
    Register,
    Unregister,
    Update,
    Character,
    Export,
    Help,
}

impl CommandKind {
    /// Resolve a command word; anything unrecognized is `Help`
    pub fn from_word(word: &str) -> Self {
        match word {
            "list" => Self::List,
            "register" => Self::Register,
            "unregister" => Self::Unregister,
            "update" => Self::Update,
            "character" => Self::Character,
            "export" => Self::Export,
            _ => Self::Help,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Register => "register",
            Self::Unregister => "unregister",
            Self::Update => "update",
            Self::Character => "character",
            Self::Export => "export",
            Self::Help => "help",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    /// The command word as typed
    pub word: String,
    /// Remaining tokens joined with single spaces
    pub argument: String,
}

/// Split a message into a command and its argument.
///
/// Tokens are separated by spaces only, so line breaks inside a profile are
/// kept. Returns `None` when the message does not open with the `prefix`
/// token or no command word follows it.
pub fn parse_command(prefix: &str, content: &str) -> Option<Command> {
    if !content.starts_with(prefix) {
        return None;
    }

    let mut tokens = content.split(' ').filter(|t| !t.is_empty());

    if tokens.next()? != prefix {
        return None;
    }

    let word = tokens.next()?;
    let argument = tokens.collect::<Vec<_>>().join(" ");

    Some(Command {
        kind: CommandKind::from_word(word),
        word: word.to_string(),
        argument,
    })
}

/// Extract `(name, profile)` from `"Character Name" profile text`.
///
/// The name sits between the first two `"` characters. The profile is
/// everything after the closing quote, minus one leading separator.
pub fn extract_name_and_profile(argument: &str) -> Result<(String, String), CommandError> {
    let quoted = || CommandError::Format("character name must be passed in quotes".to_string());

    let open = argument.find('"').ok_or_else(quoted)?;
    let rest = &argument[open + 1..];
    let close = rest.find('"').ok_or_else(quoted)?;

    let name = rest[..close].trim();
    let profile = strip_separator(&rest[close + 1..]);

    if name.is_empty() || profile.trim().is_empty() {
        return Err(CommandError::Format(
            "a character needs both a name and a profile".to_string(),
        ));
    }

    Ok((name.to_string(), profile.to_string()))
}

/// Append attachment URLs to a profile, one per line after a blank line
pub fn append_attachments(profile: &str, attachments: &[String]) -> String {
    if attachments.is_empty() {
        return profile.to_string();
    }

    let mut out = String::with_capacity(
        profile.len() + 1 + attachments.iter().map(|a| a.len() + 1).sum::<usize>(),
    );
    out.push_str(profile);
    out.push('\n');
    for url in attachments {
        out.push('\n');
        out.push_str(url);
    }
    out
}

fn strip_separator(s: &str) -> &str {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => s,
    }
}
