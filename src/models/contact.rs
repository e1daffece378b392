//! Contact model representing a person in the address book.

use super::note::{normalize_text, Note};
use crate::domain::{strip_tags, Address, Birthday, Email, Phone, Tag};
use crate::error::{CommandError, CommandResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A contact in the address book.
///
/// Phone numbers are unique within a contact. Uniqueness across the whole
/// book is enforced by [`crate::book::AddressBook`], which can see every
/// contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Normalized full name
    name: String,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<Email>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<Address>,

    /// Notes in insertion order; texts are unique case-insensitively
    #[serde(default)]
    notes: Vec<Note>,
}

impl Contact {
    /// Create a new contact with no fields set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
            email: None,
            address: None,
            notes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Check the rules a contact keeps for itself. Phones and note texts
    /// must not repeat, and the name must not be blank.
    ///
    /// Contacts built through the methods here always pass; records read
    /// from a snapshot may not.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("contact with an empty name".to_string());
        }
        for (i, phone) in self.phones.iter().enumerate() {
            if self.phones[..i].contains(phone) {
                return Err(format!("phone '{}' repeated for '{}'", phone, self.name));
            }
        }
        for (i, note) in self.notes.iter().enumerate() {
            if note.text().is_empty() {
                return Err(format!("empty note for '{}'", self.name));
            }
            if self.notes[..i].iter().any(|n| n.same_text(note.text())) {
                return Err(format!(
                    "note '{}' repeated for '{}'",
                    note.text(),
                    self.name
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    // ==================== Phones ====================

    pub fn has_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == phone)
    }

    /// Append a phone number.
    ///
    /// # Errors
    ///
    /// `CommandError::DuplicateValue` if this contact already has the number.
    pub fn add_phone(&mut self, phone: Phone) -> CommandResult<()> {
        if self.has_phone(phone.as_str()) {
            return Err(CommandError::DuplicateValue(format!(
                "The number '{}' already exists for this contact.",
                phone
            )));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Replace `old` with `new`, keeping its position.
    pub fn replace_phone(&mut self, old: &str, new: Phone) -> CommandResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| {
                CommandError::NotFound(format!("The old number '{}' was not found.", old))
            })?;

        if new.as_str() != old && self.has_phone(new.as_str()) {
            return Err(CommandError::DuplicateValue(format!(
                "The number '{}' already exists for this contact.",
                new
            )));
        }

        self.phones[index] = new;
        Ok(())
    }

    /// Remove a phone number; returns `false` if the contact did not have it.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        self.phones.len() != before
    }

    // ==================== Single-valued fields ====================

    /// Set or clear the birthday, returning the previous value.
    pub fn set_birthday(&mut self, birthday: Option<Birthday>) -> Option<Birthday> {
        std::mem::replace(&mut self.birthday, birthday)
    }

    /// Set or clear the email, returning the previous value.
    pub fn set_email(&mut self, email: Option<Email>) -> Option<Email> {
        std::mem::replace(&mut self.email, email)
    }

    /// Set or clear the address, returning the previous value.
    pub fn set_address(&mut self, address: Option<Address>) -> Option<Address> {
        std::mem::replace(&mut self.address, address)
    }

    // ==================== Notes ====================

    /// Append a note unless one with the same text already exists.
    ///
    /// Returns `false` (and leaves the contact untouched) for a duplicate.
    pub fn add_note(&mut self, note: Note) -> bool {
        if self.find_note(note.text()).is_some() {
            return false;
        }
        self.notes.push(note);
        true
    }

    /// Note whose text equals `text`, ignoring case and extra whitespace.
    pub fn find_note(&self, text: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.same_text(text))
    }

    pub fn find_note_mut(&mut self, text: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.same_text(text))
    }

    /// Remove the note matching `text`; inline `#tags` in `text` are ignored.
    pub fn remove_note(&mut self, text: &str) -> bool {
        let wanted = strip_tags(text);
        match self.notes.iter().position(|n| n.same_text(&wanted)) {
            Some(index) => {
                self.notes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the text and tags of the note matching `old`.
    ///
    /// # Errors
    ///
    /// - `CommandError::NotFound` if no note matches `old`
    /// - `CommandError::DuplicateValue` if another note already has `new_text`
    pub fn edit_note(
        &mut self,
        old: &str,
        new_text: &str,
        tags: BTreeSet<Tag>,
    ) -> CommandResult<&Note> {
        let index = self
            .notes
            .iter()
            .position(|n| n.same_text(old))
            .ok_or_else(|| CommandError::NotFound("Note not found.".to_string()))?;

        let clash = self
            .notes
            .iter()
            .enumerate()
            .any(|(i, n)| i != index && n.same_text(new_text));
        if clash {
            return Err(CommandError::DuplicateValue(format!(
                "Note '{}' already exists.",
                normalize_text(new_text)
            )));
        }

        self.notes[index].replace(new_text, tags);
        Ok(&self.notes[index])
    }

    /// Drop every note, returning how many were removed.
    pub fn clear_notes(&mut self) -> usize {
        let count = self.notes.len();
        self.notes.clear();
        count
    }

    // ==================== Search ====================

    /// Case-insensitive substring match over name, phones, email, address
    /// and birthday. `query` must already be lower-case.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.phones.iter().any(|p| p.as_str().contains(query))
            || self
                .email
                .as_ref()
                .is_some_and(|e| e.as_str().to_lowercase().contains(query))
            || self
                .address
                .as_ref()
                .is_some_and(|a| a.as_str().to_lowercase().contains(query))
            || self
                .birthday
                .as_ref()
                .is_some_and(|b| b.to_text().contains(query))
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "👤 {}: ", self.name)?;
        if self.phones.is_empty() {
            write!(f, "No phone numbers available.")?;
        } else {
            let phones = self
                .phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join("; ");
            write!(f, "{}", phones)?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        if let Some(email) = &self.email {
            write!(f, ", Email: {}", email)?;
        }
        if let Some(address) = &self.address {
            write!(f, ", Address: {}", address)?;
        }
        if !self.notes.is_empty() {
            let notes = self
                .notes
                .iter()
                .map(Note::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            write!(f, ", Notes: {}", notes)?;
        }
        Ok(())
    }
}
