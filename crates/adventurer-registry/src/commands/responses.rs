//! User-facing reply texts

use crate::domain::Character;

pub(crate) const GENERIC_FAILURE: &str = "Whoops! Something's gone wrong!\nWe're not sure what's happened but this issue has been logged and will be investigated in case a fix is needed.";

pub(crate) const NO_EXPORTABLE_CHARACTERS: &str =
    "You don't seem to have any characters registered yet.";

pub(crate) fn empty_list(prefix: &str) -> String {
    format!(
        "No characters have been registered yet! Register the first with:\n `{prefix} register \"Character Name\" a full character description,\nnewlines included`"
    )
}

pub(crate) fn character_list(characters: &[Character]) -> String {
    let names = characters
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    format!("All characters currently registered:\n{names}")
}

pub(crate) fn register_usage(prefix: &str) -> String {
    format!(
        "A character must be registered with both a name and a content, in format: \n`{prefix} register \"Character Name\" Character description,\noptionally with newlines`"
    )
}

pub(crate) fn update_usage(prefix: &str) -> String {
    format!(
        "A character must be updated with both a name and a content, in format: \n`{prefix} update \"Character Name\" Character description,\noptionally with newlines`"
    )
}

pub(crate) fn unregister_usage(prefix: &str) -> String {
    format!("Tell me which character to remove, in format: \n`{prefix} unregister Character Name`")
}

pub(crate) fn character_usage(prefix: &str) -> String {
    format!("Tell me which character to look up, in format: \n`{prefix} character Character Name`")
}

pub(crate) fn registered(name: &str) -> String {
    format!("{name} has been registered!")
}

pub(crate) fn unregistered(name: &str) -> String {
    format!("'{name}' has been unregistered!")
}

pub(crate) fn updated(name: &str) -> String {
    format!("'{name}' has been updated!")
}

pub(crate) fn no_such_character(name: &str) -> String {
    format!("No character by the name of '{name}' exists in the Adventurer Registry!")
}

pub(crate) fn character_profile(character: &Character) -> String {
    format!("{}\n\n{}", character.name, character.profile)
}

pub(crate) fn export_document(characters: &[Character]) -> String {
    characters
        .iter()
        .map(|c| format!("**{}**\n{}\n\n\n", c.name, c.profile))
        .collect()
}

pub(crate) fn export_filename(author_name: &str) -> String {
    format!("{author_name} character export.txt")
}

pub(crate) fn help(prefix: &str) -> String {
    [
        "AdventureRegistry command help:".to_string(),
        "**Characters registered with this bot are linked to you and the server you are in. Expect that characters you create in DMs with this bot will not be available in any servers, however all characters you create anywhere will be available to you in DMs.**\n".to_string(),
        format!("`{prefix}` - is the bots command prefix. All commands will be prefixed with this"),
        format!("`{prefix} list` - will list the names of all currently registered characters. Use this to confirm spelling when looking up a character"),
        format!("`{prefix} register \"Character Name\" TypeFullDescriptionHere` - will allow you to add a character to the list"),
        format!("`{prefix} unregister Character Name` - Removes a character from the registry, this is permanent"),
        format!("`{prefix} update \"Character Name\" TypeFullDescriptionHere` - Updates a characters profile in the registry"),
        format!("`{prefix} character Character Name` - Fetch a characters profile by name as a DM"),
        format!("`{prefix} export` - Export all characters created by you"),
        format!("`{prefix} help` shows this help screen"),
    ]
    .join("\n")
}
