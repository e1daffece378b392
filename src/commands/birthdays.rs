//! Birthday commands.

use super::{forbid_args, require_args, CommandContext, CommandOutcome};
use crate::book::AddressBook;
use crate::domain::{normalize_name, Birthday, ValidationError};
use crate::error::{CommandError, CommandResult};
use crate::models::Contact;
use crate::resolver;

fn not_set() -> CommandError {
    CommandError::NotFound("Birthday is not set.".to_string())
}

/// `addbday <name...> <DD.MM.YYYY>`
pub fn add_birthday(
    args: &[String],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<CommandOutcome> {
    require_args(args, 2)?;
    let res = resolver::fixed_suffix(args, 1)?;
    let raw = res.payload[0].as_str();

    if !Birthday::is_well_formed(raw) {
        return Err(ValidationError::InvalidDate(raw.to_string()).into());
    }

    let contact = book.get_mut(&res.name)?;
    if contact.birthday().is_some() {
        return Err(CommandError::DuplicateValue(
            "Birthday is already set. Use ‘editbday’ to change it.".to_string(),
        ));
    }

    contact.set_birthday(Some(Birthday::new_as_of(raw, ctx.today)?));
    Ok(CommandOutcome::changed("🎉 Birthday added!"))
}

/// `editbday <name...> <DD.MM.YYYY>`
pub fn edit_birthday(
    args: &[String],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<CommandOutcome> {
    require_args(args, 2)?;
    let res = resolver::fixed_suffix(args, 1)?;
    let contact = book.get_mut(&res.name)?;

    let birthday = Birthday::new_as_of(res.payload[0].as_str(), ctx.today)?;
    contact.set_birthday(Some(birthday));
    Ok(CommandOutcome::changed("✅ Birthday updated!"))
}

/// `removebday <name...>`
pub fn remove_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 1)?;
    let name = normalize_name(&args.join(" "));
    let contact = book.get_mut(&name)?;

    if contact.set_birthday(None).is_none() {
        return Err(not_set());
    }
    Ok(CommandOutcome::changed("✅ Birthday removed!"))
}

fn birthday_line(contact: &Contact) -> Option<String> {
    contact
        .birthday()
        .map(|b| format!("🎂 Birthday {}: {}", contact.name(), b))
}

/// `showbday <name fragment>`
pub fn show_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 1)?;
    let fragment = args.join(" ");
    let found = book.contacts_matching_name(fragment.trim());

    match found.as_slice() {
        [] => Err(CommandError::ContactNotFound),
        [single] => birthday_line(single)
            .map(CommandOutcome::success)
            .ok_or_else(not_set),
        many => {
            let lines: Vec<String> = many.iter().filter_map(|c| birthday_line(c)).collect();
            if lines.is_empty() {
                return Err(CommandError::NotFound(
                    "None of the contacts have a birthday set.".to_string(),
                ));
            }
            let mut message = vec!["Multiple contacts found:".to_string()];
            message.extend(lines);
            message.push("Please provide the full name for an exact match.".to_string());
            Ok(CommandOutcome::success(message.join("\n")))
        }
    }
}

/// `upcomingbdays`: birthdays within the configured window.
pub fn upcoming(
    args: &[String],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<CommandOutcome> {
    forbid_args(args)?;
    let upcoming = book.upcoming_birthdays(ctx.today, ctx.birthday_window);
    if upcoming.is_empty() {
        return Ok(CommandOutcome::info(format!(
            "🎂 No upcoming birthdays in the next {} days.",
            ctx.birthday_window
        )));
    }

    let mut lines = vec![format!(
        "🎂 Upcoming birthdays in the next {} days:",
        ctx.birthday_window
    )];
    lines.extend(upcoming.iter().map(ToString::to_string));
    Ok(CommandOutcome::success(lines.join("\n")))
}
