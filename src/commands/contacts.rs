//! Contact-level commands: add, rename, remove, search, list.

use super::{forbid_args, require_args, CommandOutcome};
use crate::book::AddressBook;
use crate::domain::{normalize_name, Address, Email, Phone};
use crate::error::{CommandError, CommandResult};
use crate::models::Contact;
use crate::render;
use crate::resolver::{self, PayloadRule};

/// `addcontact <name...> <phone> [<phone>...] [<email>] [<address...>]`
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 2)?;
    let draft = resolver::sniff_contact(args)?;

    if book.exists(&draft.name) {
        return Err(CommandError::DuplicateValue(format!(
            "A contact named '{}' already exists.",
            draft.name
        )));
    }

    let mut contact = Contact::new(draft.name);
    for raw in draft.phones {
        let phone = Phone::new(raw)?;
        if let Some(owner) = book.phone_owner(phone.as_str(), None) {
            return Err(CommandError::DuplicateValue(format!(
                "The number '{}' already belongs to '{}'.",
                phone,
                owner.name()
            )));
        }
        contact.add_phone(phone)?;
    }

    if let Some(email) = draft.email {
        contact.set_email(Some(Email::new(email)?));
    }
    if let Some(address) = draft.address {
        contact.set_address(Some(Address::new(address)));
    }

    book.add(contact)?;
    Ok(CommandOutcome::changed("✅ Contact added!"))
}

/// `editname <old name...> <new name...>`
pub fn edit_name(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 2)?;
    let res = resolver::greedy_prefix(args, book, PayloadRule::Required)?;
    let new_name = normalize_name(&res.payload_text());

    book.rename(&res.name, &new_name)?;
    Ok(CommandOutcome::changed(format!(
        "✅ Contact name changed to '{}'!",
        new_name
    )))
}

/// `removecontact <name...>`
pub fn remove_contact(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 1)?;
    let name = normalize_name(&args.join(" "));
    let removed = book.delete(&name).ok_or(CommandError::ContactNotFound)?;
    Ok(CommandOutcome::changed(format!(
        "✅ Contact '{}' removed!",
        removed.name()
    )))
}

/// Words that explain how to search instead of searching for themselves.
fn search_hint(query: &str) -> Option<&'static str> {
    let hint = match query {
        "note" | "notes" => "To search notes, use: searchnote <keyword>",
        "email" => "Just type 'search' followed by a valid email like 'search example@example.com' or contact name.",
        "address" => "Just type 'search' followed by a keyword from the address.",
        "phone" | "phones" => "Use 'showphone' command or type 'search' followed by a phone number like 'search 0661234567'.",
        "birthday" | "bday" | "birth" => "Use 'showbday' command or type 'search' followed by a date like 'search 22.07.1995' or 'search anna'.",
        "name" | "contact" => "Just type 'search' followed by a name like 'search Ivan'.",
        "tag" => "Just type 'search' followed by a tag like 'search #yourtag'.",
        _ => return None,
    };
    Some(hint)
}

/// `search <query>`: substring match over every contact field.
pub fn search(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 1)?;
    let query = args[0].to_lowercase();

    if let Some(hint) = search_hint(&query) {
        return Ok(CommandOutcome::info(hint));
    }

    let results = book.search(&query);
    if results.is_empty() {
        return Err(CommandError::NotFound("No matches found.".to_string()));
    }
    Ok(CommandOutcome::success(
        results
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    ))
}

/// `all`: every contact as a table.
pub fn show_all(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    forbid_args(args)?;
    if book.is_empty() {
        return Ok(CommandOutcome::info("😓 Address book is empty."));
    }
    Ok(CommandOutcome::success(render::contacts_table(book)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_add_contact_full() {
        let mut book = AddressBook::new();
        let outcome = add_contact(
            &args("Ivan Petrov 0987654321 ivan@example.com vul. Parkova 12, Kyiv"),
            &mut book,
        )
        .unwrap();
        assert!(outcome.changed);

        let ivan = book.find("Ivan Petrov").unwrap();
        assert_eq!(ivan.phones()[0].as_str(), "0987654321");
        assert_eq!(ivan.email().unwrap().as_str(), "ivan@example.com");
        assert_eq!(ivan.address().unwrap().as_str(), "vul. Parkova 12, Kyiv");
    }

    #[test]
    fn test_add_contact_rejects_bad_code_atomically() {
        let mut book = AddressBook::new();
        let err = add_contact(&args("Ivan 0661234567 0111234567"), &mut book).unwrap_err();
        assert!(matches!(err, CommandError::ValidationFailed(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_contact_rejects_invalid_email() {
        let mut book = AddressBook::new();
        let err = add_contact(&args("Ivan 0661234567 bad@mail"), &mut book).unwrap_err();
        assert!(matches!(err, CommandError::ValidationFailed(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_edit_name() {
        let mut book = AddressBook::new();
        add_contact(&args("ivan 0661234567"), &mut book).unwrap();
        let outcome = edit_name(&args("Ivan petro ivanenko"), &mut book).unwrap();
        assert_eq!(outcome.message, "✅ Contact name changed to 'Petro Ivanenko'!");
        assert!(book.exists("Petro Ivanenko"));
        assert!(!book.exists("Ivan"));
    }

    #[test]
    fn test_search_hint_short_circuits() {
        let mut book = AddressBook::new();
        let outcome = search(&args("notes"), &mut book).unwrap();
        assert!(outcome.message.contains("searchnote"));
    }
}
