//! Sample data for integration tests.

use assistant_bot::domain::{Address, Birthday, Email, Phone};
use assistant_bot::{AddressBook, Contact, Note};

use super::today;

/// Create a contact with the given phones and nothing else.
pub fn sample_contact(name: &str, phones: &[&str]) -> Contact {
    let mut contact = Contact::new(name);
    for phone in phones {
        contact
            .add_phone(Phone::new(*phone).expect("fixture phone is valid"))
            .expect("fixture phones are distinct");
    }
    contact
}

/// A contact with every field filled in.
#[allow(dead_code)]
pub fn full_contact() -> Contact {
    let mut contact = sample_contact("Ivan Petrov", &["0987654321", "0661234567"]);
    contact.set_birthday(Some(
        Birthday::new_as_of("15.06.1990", today()).expect("fixture date is valid"),
    ));
    contact.set_email(Some(Email::new("ivan@example.com").expect("fixture email is valid")));
    contact.set_address(Some(Address::new("vul. Parkova 12, Kyiv")));
    contact.add_note(Note::new("Meeting with client", ["urgent", "work"]).expect("valid tags"));
    contact.add_note(Note::new("Buy a gift", Vec::<String>::new()).expect("no tags"));
    contact
}

/// A small book: a full contact, a second contact and a bare one.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut olena = sample_contact("Olena", &["0971112233"]);
    olena.add_note(Note::new("Quarterly report", ["work"]).expect("valid tag"));

    let mut book = AddressBook::new();
    book.add(full_contact()).expect("unique");
    book.add(olena).expect("unique");
    book.add(Contact::new("Ann")).expect("unique");
    book
}
