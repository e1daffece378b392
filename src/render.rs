//! Plain-text tables for `help` and `all`.

use crate::book::AddressBook;
use crate::domain::Phone;
use crate::models::{Contact, Note};

/// Render rows as a table with a header, a rule and columns padded to fit
/// their widest cell.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers.to_vec())];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.extend(rows.iter().map(|row| line(row.iter().map(String::as_str).collect())));
    out.join("\n")
}

const HELP: &[(&str, &str, &str)] = &[
    ("General", "hello", "Greet the bot"),
    ("", "help", "Show this table"),
    ("", "exit, close", "Save and leave"),
    ("Contacts", "addcontact <name> <phone> [phones] [email] [address]", "Add a contact"),
    ("", "editname <old name> <new name>", "Rename a contact"),
    ("", "removecontact <name>", "Delete a contact"),
    ("", "search <query>", "Search name, phone, birthday, email or address"),
    ("", "all", "Show every contact"),
    ("Phones", "addphone <name> <phone>", "Add a phone number"),
    ("", "changephone <name> <old> <new>", "Replace a phone number"),
    ("", "removephone <name> <phone>", "Remove a phone number"),
    ("", "showphone <name | phone>", "Show phone numbers"),
    ("Birthdays", "addbday <name> <DD.MM.YYYY>", "Set a birthday"),
    ("", "showbday <name>", "Show a birthday"),
    ("", "editbday <name> <DD.MM.YYYY>", "Change a birthday"),
    ("", "removebday <name>", "Remove a birthday"),
    ("", "upcomingbdays", "Birthdays in the coming days"),
    ("Email", "addemail <name> <email>", "Set an email"),
    ("", "editemail <name> <email>", "Change an email"),
    ("", "removeemail <name>", "Remove an email"),
    ("Address", "addaddress <name> <address>", "Set an address"),
    ("", "editaddress <name> <address>", "Change an address"),
    ("", "removeaddress <name>", "Remove an address"),
    ("Notes", "addnote <name> <text> [#tags]", "Add a note"),
    ("", "editnote <name> <old text> <new text> [#tags]", "Edit a note"),
    ("", "removenote <name> [text]", "Remove one or all notes"),
    ("", "searchnote <keyword>", "Search notes"),
    ("", "addtag <name> <text> <#tag>", "Tag a note"),
    ("", "removetag <name> <text> [#tag]", "Remove one or all tags from a note"),
    ("", "searchtag <#tag>", "Notes with a tag"),
    ("", "sorttag", "Notes grouped by tag"),
];

/// The command reference shown by `help`.
pub fn help_table() -> String {
    let rows: Vec<Vec<String>> = HELP
        .iter()
        .map(|(group, usage, about)| {
            vec![group.to_string(), usage.to_string(), about.to_string()]
        })
        .collect();
    format!(
        "📖 Available commands:\n{}",
        table(&["Group", "Command", "Description"], &rows)
    )
}

fn or_dash(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_string())
}

fn contact_row(contact: &Contact) -> Vec<String> {
    let phones = contact
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join("; ");
    let notes = contact
        .notes()
        .iter()
        .map(Note::to_string)
        .collect::<Vec<_>>()
        .join("; ");

    vec![
        contact.name().to_string(),
        or_dash(Some(phones)),
        or_dash(contact.birthday().map(|b| b.to_text())),
        or_dash(contact.email().map(|e| e.as_str().to_string())),
        or_dash(contact.address().map(|a| a.as_str().to_string())),
        or_dash(Some(notes)),
    ]
}

/// Every contact as one table row, in book order.
pub fn contacts_table(book: &AddressBook) -> String {
    if book.is_empty() {
        return "😓 Address book is empty.".to_string();
    }
    let rows: Vec<Vec<String>> = book.iter().map(contact_row).collect();
    table(
        &["Name", "Phones", "Birthday", "Email", "Address", "Notes"],
        &rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Email;

    #[test]
    fn test_table_pads_columns() {
        let rows = vec![
            vec!["a".to_string(), "long cell".to_string()],
            vec!["bbb".to_string(), "x".to_string()],
        ];
        let out = table(&["H1", "H2"], &rows);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "H1  | H2");
        assert_eq!(lines[1], "----+----------");
        assert_eq!(lines[2], "a   | long cell");
        assert_eq!(lines[3], "bbb | x");
    }

    #[test]
    fn test_contacts_table_uses_dash_for_missing() {
        let mut book = AddressBook::new();
        let mut ivan = Contact::new("Ivan");
        ivan.add_phone(Phone::new("0661234567").unwrap()).unwrap();
        ivan.set_email(Some(Email::new("ivan@example.com").unwrap()));
        book.add(ivan).unwrap();

        let out = contacts_table(&book);
        let row = out.lines().nth(2).unwrap();
        assert!(row.starts_with("Ivan | 0661234567 | -        | ivan@example.com | -"));
    }

    #[test]
    fn test_contacts_table_empty() {
        assert_eq!(contacts_table(&AddressBook::new()), "😓 Address book is empty.");
    }

    #[test]
    fn test_help_lists_every_group() {
        let help = help_table();
        for group in ["General", "Contacts", "Phones", "Birthdays", "Email", "Address", "Notes"] {
            assert!(help.contains(group), "missing group {}", group);
        }
        for word in crate::commands::Command::words() {
            assert!(help.contains(word), "missing command {}", word);
        }
    }
}
