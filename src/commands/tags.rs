//! Tag commands: tagging notes and browsing notes by tag.

use super::{forbid_args, require_args, CommandOutcome};
use crate::book::AddressBook;
use crate::domain::{first_tag, strip_tags, Tag};
use crate::error::{CommandError, CommandResult};
use crate::resolver::{self, PayloadRule};
use std::collections::BTreeMap;

/// `addtag <name...> <note text...> <tag>`
///
/// The last token is the tag; the tokens between the name and the tag must
/// match a note's text exactly (ignoring case and extra whitespace).
pub fn add_tag(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 3)?;
    let res = resolver::greedy_prefix(args, book, PayloadRule::ReserveTrailing(2))?;
    let (raw_tag, text_tokens) = res
        .payload
        .split_last()
        .ok_or(CommandError::MissingArguments)?;

    let text = strip_tags(&text_tokens.join(" "));
    if text.is_empty() {
        return Err(CommandError::MissingArguments);
    }
    let tag = Tag::new(raw_tag)?;

    let note = book
        .get_mut(&res.name)?
        .find_note_mut(&text)
        .ok_or_else(|| {
            CommandError::NotFound(
                "Note not found. Please check the note text. Be exact.".to_string(),
            )
        })?;

    if !note.add_tag(tag.as_str())? {
        return Ok(CommandOutcome::info(format!(
            "⚠️ Tag '{}' is already present in the note.",
            tag
        )));
    }
    Ok(CommandOutcome::changed(format!(
        "🏷️ Tag '{}' added to note: {}",
        tag,
        note.text()
    )))
}

/// `removetag <name...> <note text...> [#tag]`
///
/// Without a tag every tag is removed from the note.
pub fn remove_tag(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 2)?;
    let res = resolver::greedy_prefix(args, book, PayloadRule::Optional)?;
    let rest = res.payload_text();

    let text = strip_tags(&rest);
    if text.is_empty() {
        return Err(CommandError::MissingArguments);
    }

    let contact = book.get_mut(&res.name)?;
    let name = contact.name().to_string();
    let note = contact.find_note_mut(&text).ok_or_else(|| {
        CommandError::NotFound(format!(
            "Note not found for '{}'. Please check the note text.",
            name
        ))
    })?;

    match first_tag(&rest) {
        Some(raw) => {
            let wanted = Tag::normalize(&raw);
            if !note.remove_tag(&wanted) {
                return Err(CommandError::NotFound(format!(
                    "Tag '#{}' not found in this note.",
                    wanted
                )));
            }
            Ok(CommandOutcome::changed(format!(
                "🗑️ Tag '#{}' removed from note: '{}'",
                wanted,
                note.text()
            )))
        }
        None => {
            if !note.clear_tags() {
                return Ok(CommandOutcome::info("ℹ️ This note has no tags."));
            }
            Ok(CommandOutcome::changed(format!(
                "🗑️ All tags removed from note: '{}'",
                note.text()
            )))
        }
    }
}

/// `searchtag <tag>`: every note carrying the tag.
pub fn search_tag(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 1)?;
    let wanted = Tag::normalize(&args[0]);
    let tag = wanted.as_str();

    let lines: Vec<String> = book
        .iter()
        .flat_map(|contact| {
            contact
                .notes()
                .iter()
                .filter(move |note| note.has_tag(tag))
                .map(move |note| format!("{}: {}", contact.name(), note))
        })
        .collect();

    if lines.is_empty() {
        return Err(CommandError::NotFound(format!(
            "No notes with tag '#{}' found.",
            wanted
        )));
    }
    Ok(CommandOutcome::success(lines.join("\n")))
}

/// `sorttag`: tagged notes grouped under their tags, tags in order.
pub fn sort_tag(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    forbid_args(args)?;

    let mut groups: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for contact in book.iter() {
        for note in contact.notes() {
            for tag in note.tags() {
                groups
                    .entry(tag.as_str())
                    .or_default()
                    .push(format!("{}: {}", contact.name(), note));
            }
        }
    }

    if groups.is_empty() {
        return Err(CommandError::NotFound("No tagged notes to sort.".to_string()));
    }

    let sections: Vec<String> = groups
        .into_iter()
        .map(|(tag, lines)| format!("📌 #{}\n{}", tag, lines.join("\n")))
        .collect();
    Ok(CommandOutcome::success(sections.join("\n\n")))
}
