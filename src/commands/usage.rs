//! Usage examples shown when a command gets too few (or unexpected) arguments.

use super::Command;

/// Usage message for `command`.
pub fn usage(command: Command) -> &'static str {
    match command {
        Command::AddContact => concat!(
            "😓 The 'addcontact' command requires at least a name and a 10-digit phone number.\n",
            "👉 You can also optionally add more phone numbers, an email and an address.\n",
            "🔹 Examples:\n",
            "   'addcontact Ivan 0987654321'\n",
            "   'addcontact Ivan Petrov 0981112222 0663334444'\n",
            "   'addcontact Ivan 0987654321 ivan@example.com'\n",
            "   'addcontact Ivan 0987654321 ivan@gmail.com vul. Parkova 12, Kyiv'"
        ),
        Command::EditName => "😓 The 'editname' command requires the old and new name. For example: 'editname Ivan Petro'",
        Command::RemoveContact => "😓 The 'removecontact' command requires a name. For example: 'removecontact Ivan'",
        Command::AddPhone => "😓 The 'addphone' command requires a name and a phone number. For example: 'addphone Ivan 0661234567'",
        Command::ChangePhone => "😓 The 'changephone' command requires a name, the old number and the new number. For example: 'changephone Ivan 0661234567 0961234567'",
        Command::RemovePhone => "😓 The 'removephone' command requires a name and a phone number to remove. For example: 'removephone Ivan 0661234567'",
        Command::ShowPhone => "😓 The 'showphone' command requires only a name. For example: 'showphone Ivan'",
        Command::AddBirthday => "😓 The 'addbday' command requires a name and a date (DD.MM.YYYY). For example: 'addbday Ivan 15.05.1990'",
        Command::ShowBirthday => "😓 The 'showbday' command requires only a name. For example: 'showbday Ivan'",
        Command::EditBirthday => "😓 The 'editbday' command requires a name and a new date (DD.MM.YYYY). For example: 'editbday Ivan 16.05.1990'",
        Command::RemoveBirthday => "😓 The 'removebday' command requires a name. For example: 'removebday Ivan'",
        Command::UpcomingBirthdays => "😓 The 'upcomingbdays' command doesn’t require any arguments. Just type 'upcomingbdays'.",
        Command::Search => "😓 The 'search' command requires a query like name, phone, birthday, email or address. For example: 'search Ivan' or 'search 0661234567' or 'search 15.05.1990' or 'search ivan@example.com' or 'search Kyiv'",
        Command::All => "😓 The 'all' command doesn’t require any arguments. Just type 'all'.",
        Command::AddEmail => "😓 The 'addemail' command requires a name and an email. For example: 'addemail Ivan ivan@example.com'",
        Command::EditEmail => "😓 The 'editemail' command requires a name and a new email. For example: 'editemail Ivan new@example.com'",
        Command::RemoveEmail => "😓 The 'removeemail' command requires a name. For example: 'removeemail Ivan'",
        Command::AddAddress => "😓 The 'addaddress' command requires a name and an address. For example: 'addaddress Ivan vul. Vilna 1, Kyiv'",
        Command::EditAddress => "😓 The 'editaddress' command requires a name and a new address. For example: 'editaddress Ivan vul. New 2, Kyiv'",
        Command::RemoveAddress => "😓 The 'removeaddress' command requires a name. For example: 'removeaddress Ivan'",
        Command::AddNote => "😓 The 'addnote' command requires a name and a note text. You can optionally include tags using #. For example: 'addnote Ivan Meeting at 3:00 PM #urgent'",
        Command::EditNote => "😓 The 'editnote' command requires a name, the old note and the new note. You can also include tags. For example: 'editnote Ivan Meeting at 3:00 PM Meeting rescheduled to 4:00 PM #urgent'",
        Command::RemoveNote => concat!(
            "😓 The 'removenote' command requires a name and optionally the note text.\n",
            "🔹 Example 1 (remove specific note): 'removenote Ivan Meeting at 3:00 PM'\n",
            "🔹 Example 2 (remove all notes): 'removenote Ivan'"
        ),
        Command::SearchNote => "😓 The 'searchnote' command requires a keyword query. For example: 'searchnote Meeting'",
        Command::AddTag => "😓 The 'addtag' command requires a name, the note text and the tag. For example: 'addtag Ivan Project planning #meeting'",
        Command::RemoveTag => concat!(
            "😓 The 'removetag' command requires a name, the note text and a tag to remove.\n",
            "🔹 Example 1 (remove specific tag): 'removetag Ivan Meeting at 3:00 PM #urgent'\n",
            "🔹 Example 2 (remove all tags from note): 'removetag Ivan Meeting at 3:00 PM'"
        ),
        Command::SearchTag => "😓 The 'searchtag' command requires a tag. For example: 'searchtag #urgent'",
        Command::Hello
        | Command::Help
        | Command::Exit
        | Command::Close
        | Command::SortTag => {
            "😓 Invalid command or arguments. Type 'help' to see available commands."
        }
    }
}
