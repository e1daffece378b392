//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The `Display` output is shown to the user verbatim, so every message
/// carries the failure glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number is not exactly 10 digits.
    InvalidPhoneFormat(String),

    /// The phone number does not start with a known operator code.
    InvalidPhoneCode(String),

    /// The date could not be parsed as DD.MM.YYYY.
    InvalidDate(String),

    /// The date lies after today.
    FutureDate(String),

    /// The year is before the earliest accepted birth year.
    UnrealisticDate(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The tag contains forbidden characters or has a bad length.
    InvalidTag(String),

    /// The contact name is empty after normalization.
    EmptyName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhoneFormat(_) => {
                write!(f, "😓 Phone number must contain exactly 10 digits.")
            }
            Self::InvalidPhoneCode(_) => write!(
                f,
                "😓 The phone number must start with a valid code: {}.",
                super::phone::VALID_CODES.join(", ")
            ),
            Self::InvalidDate(_) => write!(
                f,
                "😓 Invalid date format. Use DD.MM.YYYY, for example, 15.05.1990."
            ),
            Self::FutureDate(_) => write!(f, "😓 Birthday cannot be in the future."),
            Self::UnrealisticDate(_) => write!(f, "😓 Unrealistic birthday. Please try again."),
            Self::InvalidEmail(_) => write!(
                f,
                "😓 Invalid email format. Please use name@example.com"
            ),
            Self::InvalidTag(tag) => write!(
                f,
                "😓 Invalid tag: '{}'. Only letters, digits, and underscores are allowed (1–30 chars).",
                tag
            ),
            Self::EmptyName => write!(f, "😓 Name is missing."),
        }
    }
}

impl std::error::Error for ValidationError {}
