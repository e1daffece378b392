//! Phone value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Mobile operator prefixes a phone number may start with.
pub const VALID_CODES: [&str; 12] = [
    "050", "066", "067", "068", "095", "096", "097", "098", "099", "063", "073", "093",
];

/// Number of digits in a phone number.
pub const PHONE_LEN: usize = 10;

/// A validated mobile phone number.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::Phone;
///
/// let phone = Phone::new("0661234567").unwrap();
/// assert_eq!(phone.as_str(), "0661234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly 10 ASCII digits
    /// - The first 3 digits must be one of [`VALID_CODES`]
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` or
    /// `ValidationError::InvalidPhoneCode`.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !looks_like_phone(&phone) {
            return Err(ValidationError::InvalidPhoneFormat(phone));
        }

        if !VALID_CODES.iter().any(|code| phone.starts_with(code)) {
            return Err(ValidationError::InvalidPhoneCode(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// True when the token is made of exactly 10 ASCII digits.
///
/// This is the structural check the resolver uses to spot phones in a
/// command line; the operator code is only checked by [`Phone::new`].
pub fn looks_like_phone(token: &str) -> bool {
    token.len() == PHONE_LEN && token.chars().all(|c| c.is_ascii_digit())
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
