//! Data models for address book entities.
//!
//! This module contains the contact record and the notes it owns.

pub mod contact;
pub mod note;

pub use contact::Contact;
pub use note::Note;
