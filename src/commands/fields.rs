//! Email and address commands.

use super::{require_args, CommandOutcome};
use crate::book::AddressBook;
use crate::domain::{format_address, normalize_name, Address, Email};
use crate::error::{CommandError, CommandResult};
use crate::resolver::{self, PayloadRule};

/// `addemail <name...> <email>`
pub fn add_email(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 2)?;
    let res = resolver::greedy_prefix(args, book, PayloadRule::Required)?;
    let email = Email::new(res.payload_text())?;

    let contact = book.get_mut(&res.name)?;
    if contact.email().is_some() {
        return Err(CommandError::DuplicateValue(
            "Email already exists. Use ‘editemail’ to change it.".to_string(),
        ));
    }
    contact.set_email(Some(email));
    Ok(CommandOutcome::changed("✅ Email added!"))
}

/// `editemail <name...> <email>`
pub fn edit_email(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 2)?;
    let res = resolver::greedy_prefix(args, book, PayloadRule::Required)?;

    let contact = book.get_mut(&res.name)?;
    if contact.email().is_none() {
        return Err(CommandError::NotFound(
            "Email is not set. Use 'addemail' to add one.".to_string(),
        ));
    }
    contact.set_email(Some(Email::new(res.payload_text())?));
    Ok(CommandOutcome::changed("✅ Email updated!"))
}

/// `removeemail <name...>`
///
/// Anything after the name is ignored.
pub fn remove_email(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 1)?;
    let res = resolver::greedy_prefix(args, book, PayloadRule::Optional)?;

    if book.get_mut(&res.name)?.set_email(None).is_none() {
        return Err(CommandError::NotFound("Email is not set.".to_string()));
    }
    Ok(CommandOutcome::changed("✅ Email removed!"))
}

/// `addaddress <name...> <address...>`
pub fn add_address(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 2)?;
    let res = resolver::greedy_prefix(args, book, PayloadRule::Required)?;
    let address = Address::new(format_address(&res.payload_text()));

    let contact = book.get_mut(&res.name)?;
    if contact.address().is_some() {
        return Err(CommandError::DuplicateValue(
            "Address already exists. Use ‘editaddress’ to change it.".to_string(),
        ));
    }
    contact.set_address(Some(address));
    Ok(CommandOutcome::changed("✅ Address added!"))
}

/// `editaddress <name...> <address...>`
pub fn edit_address(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 2)?;
    let res = resolver::greedy_prefix(args, book, PayloadRule::Required)?;
    let address = Address::new(format_address(&res.payload_text()));

    book.get_mut(&res.name)?.set_address(Some(address));
    Ok(CommandOutcome::changed("✅ Address updated!"))
}

/// `removeaddress <name...>`
pub fn remove_address(args: &[String], book: &mut AddressBook) -> CommandResult<CommandOutcome> {
    require_args(args, 1)?;
    let name = normalize_name(&args.join(" "));

    if book.get_mut(&name)?.set_address(None).is_none() {
        return Err(CommandError::NotFound("Address is not set.".to_string()));
    }
    Ok(CommandOutcome::changed("✅ Address removed!"))
}
