//! Note commands.

use super::{require_args, CommandOutcome};
use crate::book::AddressBook;
use crate::domain::{extract_tags, strip_tags, Tag};
use crate::error::{CommandError, CommandResult};
use crate::models::Note;
use crate::resolver::{self, PayloadRule};
use std::collections::BTreeSet;

/// `addnote <name...> <text...> [#tag...]`
pub fn add_note(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 2)?;
    let res = resolver::greedy_prefix(args, book, PayloadRule::Required)?;
    let payload = res.payload_text();

    let text = strip_tags(&payload);
    if text.is_empty() {
        return Err(CommandError::MissingArguments);
    }
    let note = Note::new(&text, extract_tags(&payload))?;
    let tag_list = note.tag_list();

    if !book.get_mut(&res.name)?.add_note(note) {
        return Err(CommandError::DuplicateValue(
            "Note already exists. Use 'editnote' to modify it.".to_string(),
        ));
    }
    Ok(CommandOutcome::changed(format!(
        "✅ Note added with tags: {}",
        tag_list
    )))
}

/// `editnote <name...> <old text...> <new text...> [#tag...]`
///
/// The note's tags are replaced by the tags written in the new text, so a
/// new text without tags leaves the note untagged.
pub fn edit_note(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 3)?;
    let res = resolver::greedy_prefix(args, book, PayloadRule::Required)?;
    let contact = book.get_mut(&res.name)?;

    let (old, rest) = resolver::match_note_prefix(res.payload, contact.notes()).ok_or_else(|| {
        CommandError::NotFound(
            "Old note not found. Please check the old note text. Be exact.".to_string(),
        )
    })?;

    let rest = rest.join(" ");
    let new_text = strip_tags(&rest);
    if new_text.is_empty() {
        return Err(CommandError::MissingArguments);
    }

    let tags = extract_tags(&rest)
        .iter()
        .map(|t| Tag::new(t))
        .collect::<Result<BTreeSet<_>, _>>()?;
    let retagged = !tags.is_empty();

    let note = contact.edit_note(&old, &new_text, tags)?;
    let message = if retagged {
        format!("✅ Note updated with tags: {}", note.tag_list())
    } else {
        "✅ Note updated".to_string()
    };
    Ok(CommandOutcome::changed(message))
}

/// `removenote <name...> [<text...>]`
///
/// Without text every note of the contact is removed.
pub fn remove_note(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 1)?;
    let res = resolver::greedy_prefix(args, book, PayloadRule::Optional)?;
    let contact = book.get_mut(&res.name)?;

    if res.payload.is_empty() {
        if contact.clear_notes() == 0 {
            return Ok(CommandOutcome::info(format!(
                "ℹ️ No notes to remove for '{}'.",
                contact.name()
            )));
        }
        return Ok(CommandOutcome::changed(format!(
            "🗑️ All notes removed for '{}'.",
            contact.name()
        )));
    }

    if !contact.remove_note(&res.payload_text()) {
        return Err(CommandError::NotFound("Note not found.".to_string()));
    }
    Ok(CommandOutcome::changed("✅ Note removed!"))
}

/// `searchnote <keyword...>`: notes whose text or owner's name contains the
/// keyword.
pub fn search_note(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 1)?;
    let query = args.join(" ").to_lowercase();
    let query = query.as_str();

    let lines: Vec<String> = book
        .iter()
        .flat_map(|contact| {
            let name_hit = contact.name().to_lowercase().contains(query);
            contact
                .notes()
                .iter()
                .filter(move |note| name_hit || note.text().to_lowercase().contains(query))
                .map(move |note| format!("{}: {}", contact.name(), note))
        })
        .collect();

    if lines.is_empty() {
        return Err(CommandError::NotFound("No notes found.".to_string()));
    }
    Ok(CommandOutcome::success(lines.join("\n")))
}
