//! Domain value objects and types.
//!
//! Each contact field has its own validated type: phone numbers, birthdays,
//! emails and note tags are checked at construction time, so an invalid
//! value can never be stored in the address book.

pub mod address;
pub mod birthday;
pub mod email;
pub mod errors;
pub mod phone;
pub mod tag;
pub mod text;

pub use address::Address;
pub use birthday::Birthday;
pub use email::Email;
pub use errors::ValidationError;
pub use phone::{looks_like_phone, Phone, VALID_CODES};
pub use tag::{extract_tags, first_tag, strip_tags, Tag};
pub use text::{format_address, normalize_name};
