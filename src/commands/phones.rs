//! Phone commands.

use super::{require_args, CommandOutcome};
use crate::book::AddressBook;
use crate::domain::Phone;
use crate::error::{CommandError, CommandResult};
use crate::models::Contact;
use crate::resolver;

fn already_belongs(label: &str, phone: &Phone, owner: &Contact) -> CommandError {
    CommandError::DuplicateValue(format!(
        "The {}number '{}' already belongs to '{}'.",
        label,
        phone,
        owner.name()
    ))
}

/// `addphone <name...> <phone>`
pub fn add_phone(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 2)?;
    let res = resolver::fixed_suffix(args, 1)?;
    if !book.exists(&res.name) {
        return Err(CommandError::ContactNotFound);
    }

    let phone = Phone::new(res.payload[0].as_str())?;
    if let Some(owner) = book.phone_owner(phone.as_str(), Some(&res.name)) {
        return Err(already_belongs("", &phone, owner));
    }

    book.get_mut(&res.name)?.add_phone(phone)?;
    Ok(CommandOutcome::changed("✅ Phone number added!"))
}

/// `changephone <name...> <old> <new>`
pub fn change_phone(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 3)?;
    let res = resolver::fixed_suffix(args, 2)?;
    let old = res.payload[0].as_str();

    let contact = book.find(&res.name).ok_or(CommandError::ContactNotFound)?;
    if !contact.has_phone(old) {
        return Err(CommandError::NotFound(format!(
            "The old number '{}' was not found.",
            old
        )));
    }

    let new = Phone::new(res.payload[1].as_str())?;
    if let Some(owner) = book.phone_owner(new.as_str(), Some(&res.name)) {
        return Err(already_belongs("new ", &new, owner));
    }

    book.get_mut(&res.name)?.replace_phone(old, new)?;
    Ok(CommandOutcome::changed("✅ Phone number updated!"))
}

/// `removephone <name...> <phone>`
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 2)?;
    let res = resolver::fixed_suffix(args, 1)?;
    let phone = res.payload[0].as_str();

    if !book.get_mut(&res.name)?.remove_phone(phone) {
        return Err(CommandError::NotFound(format!(
            "Phone number '{}' not found.",
            phone
        )));
    }
    Ok(CommandOutcome::changed("✅ Phone number removed!"))
}

fn phone_line(contact: &Contact) -> String {
    let phones = if contact.phones().is_empty() {
        "No phone numbers available.".to_string()
    } else {
        contact
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{}: {}", contact.name(), phones)
}

/// `showphone <name fragment | phone>`
///
/// When the arguments carry exactly ten digits in total they are read as a
/// phone number; otherwise they are a case-insensitive name fragment.
pub fn show_phone(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 1)?;
    let query = args.join(" ");
    let digits: String = query.chars().filter(char::is_ascii_digit).collect();

    let found: Vec<&Contact> = if digits.len() == 10 {
        book.iter().filter(|c| c.has_phone(&digits)).collect()
    } else {
        book.contacts_matching_name(query.trim())
    };

    match found.as_slice() {
        [] => Err(CommandError::ContactNotFound),
        [single] => Ok(CommandOutcome::success(phone_line(single))),
        many => {
            let mut lines = vec!["Multiple contacts found:".to_string()];
            lines.extend(many.iter().map(|c| phone_line(c)));
            Ok(CommandOutcome::success(lines.join("\n")))
        }
    }
}
