//! The address book: an ordered, case-insensitively keyed set of contacts.

mod birthdays;

pub use birthdays::{next_occurrence, UpcomingBirthday};

use crate::error::{CommandError, CommandResult};
use crate::models::Contact;
use chrono::{Duration, NaiveDate};

/// Default look-ahead for upcoming birthdays, in days.
pub const DEFAULT_BIRTHDAY_WINDOW: u32 = 7;

/// Every contact the user keeps, in insertion order.
///
/// Names are unique under case-insensitive comparison and phone numbers are
/// unique across all contacts. Both invariants are enforced here rather than
/// by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from loaded contacts, checking each contact's own rules
    /// and the book-wide invariants.
    pub fn from_contacts(contacts: Vec<Contact>) -> Result<Self, String> {
        let mut book = Self::new();
        for contact in contacts {
            contact.validate()?;
            if book.exists(contact.name()) {
                return Err(format!("duplicate contact name '{}'", contact.name()));
            }
            if let Some(phone) = contact
                .phones()
                .iter()
                .find(|p| book.phone_owner(p.as_str(), None).is_some())
            {
                return Err(format!("phone '{}' is shared by two contacts", phone));
            }
            book.contacts.push(contact);
        }
        Ok(book)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }

    /// Insert a new contact at the end of the book.
    ///
    /// # Errors
    ///
    /// `CommandError::DuplicateValue` if a contact with the same name
    /// (ignoring case) exists or one of its phones belongs to someone else.
    pub fn add(&mut self, contact: Contact) -> CommandResult<()> {
        if self.exists(contact.name()) {
            return Err(CommandError::DuplicateValue(format!(
                "A contact named '{}' already exists.",
                contact.name()
            )));
        }
        for phone in contact.phones() {
            if let Some(owner) = self.phone_owner(phone.as_str(), None) {
                return Err(CommandError::DuplicateValue(format!(
                    "The number '{}' already belongs to '{}'.",
                    phone,
                    owner.name()
                )));
            }
        }
        tracing::debug!(name = contact.name(), "Contact added");
        self.contacts.push(contact);
        Ok(())
    }

    /// Case-insensitive exact lookup.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| same_name(c.name(), name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| same_name(c.name(), name))
    }

    /// Like [`find_mut`](Self::find_mut) but reports a missing contact as an error.
    pub fn get_mut(&mut self, name: &str) -> CommandResult<&mut Contact> {
        self.find_mut(name).ok_or(CommandError::ContactNotFound)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Remove a contact, returning it if it was present.
    pub fn delete(&mut self, name: &str) -> Option<Contact> {
        let index = self.contacts.iter().position(|c| same_name(c.name(), name))?;
        Some(self.contacts.remove(index))
    }

    /// Rename a contact in place, keeping its position in the book.
    ///
    /// Renaming to a different casing of the same name is allowed.
    pub fn rename(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let index = self
            .contacts
            .iter()
            .position(|c| same_name(c.name(), old))
            .ok_or(CommandError::ContactNotFound)?;

        let clash = self
            .contacts
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && same_name(c.name(), new));
        if clash {
            return Err(CommandError::DuplicateValue(format!(
                "A contact named '{}' already exists.",
                new
            )));
        }

        self.contacts[index].set_name(new.to_string());
        Ok(())
    }

    /// The contact holding `phone`, skipping the contact named `except`.
    pub fn phone_owner(&self, phone: &str, except: Option<&str>) -> Option<&Contact> {
        self.contacts
            .iter()
            .filter(|c| except.map_or(true, |name| !same_name(c.name(), name)))
            .find(|c| c.has_phone(phone))
    }

    /// Case-insensitive substring search over name, phones, email, address
    /// and birthday.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let query = query.to_lowercase();
        self.contacts.iter().filter(|c| c.matches(&query)).collect()
    }

    /// Contacts whose name contains `fragment`, ignoring case.
    pub fn contacts_matching_name(&self, fragment: &str) -> Vec<&Contact> {
        let fragment = fragment.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| c.name().to_lowercase().contains(&fragment))
            .collect()
    }

    /// Birthdays falling within `[today, today + window_days]`.
    ///
    /// Inclusion is decided on the actual anniversary; the reported
    /// congratulation date moves weekend days to the following Monday.
    /// Results follow book order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let end = today + Duration::days(i64::from(window_days));
        self.contacts
            .iter()
            .filter_map(|contact| {
                let birthday = contact.birthday()?;
                let occurrence = next_occurrence(birthday.date(), today);
                (occurrence <= end).then(|| UpcomingBirthday::new(contact.name(), occurrence))
            })
            .collect()
    }
}
