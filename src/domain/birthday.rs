//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual date format used for input, storage and display.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Earliest accepted birth year.
pub const MIN_YEAR: i32 = 1930;

/// A validated date of birth.
///
/// The date must parse as `DD.MM.YYYY`, must not lie in the future and the
/// year must be at least [`MIN_YEAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validated against the local current date.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::new_as_of(raw, Local::now().date_naive())
    }

    /// Create a new Birthday, validated against an explicit `today`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidDate` if the text does not parse
    /// - `ValidationError::FutureDate` if the date is after `today`
    /// - `ValidationError::UnrealisticDate` if the year is before 1930
    pub fn new_as_of(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(raw.to_string()))?;

        if date > today {
            return Err(ValidationError::FutureDate(raw.to_string()));
        }
        if date.year() < MIN_YEAR {
            return Err(ValidationError::UnrealisticDate(raw.to_string()));
        }

        Ok(Self(date))
    }

    /// Check only the textual shape of a date, without the range rules.
    pub fn is_well_formed(raw: &str) -> bool {
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).is_ok()
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Normalized `DD.MM.YYYY` form.
    pub fn to_text(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_text().serialize(serializer)
    }
}

// Snapshots were valid when written, so only the shape is re-checked here;
// the "not in the future" rule depends on the clock of the writer.
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| serde::de::Error::custom(ValidationError::InvalidDate(s)))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let bday = Birthday::new_as_of("15.06.1990", today()).unwrap();
        assert_eq!(bday.to_text(), "15.06.1990");
        assert_eq!(bday.date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
    }

    #[test]
    fn test_birthday_normalizes_padding() {
        let bday = Birthday::new_as_of("5.6.1990", today()).unwrap();
        assert_eq!(bday.to_text(), "05.06.1990");
    }

    #[test]
    fn test_birthday_rejects_bad_format() {
        for raw in ["1990-06-15", "15/06/1990", "31.02.1990", "abc", ""] {
            assert!(
                matches!(
                    Birthday::new_as_of(raw, today()),
                    Err(ValidationError::InvalidDate(_))
                ),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_birthday_rejects_future() {
        assert!(matches!(
            Birthday::new_as_of("11.06.2024", today()),
            Err(ValidationError::FutureDate(_))
        ));
        assert!(Birthday::new_as_of("10.06.2024", today()).is_ok());
    }

    #[test]
    fn test_birthday_rejects_before_1930() {
        assert!(matches!(
            Birthday::new_as_of("31.12.1929", today()),
            Err(ValidationError::UnrealisticDate(_))
        ));
        assert!(Birthday::new_as_of("01.01.1930", today()).is_ok());
    }

    #[test]
    fn test_birthday_serde() {
        let bday = Birthday::new_as_of("01.02.2000", today()).unwrap();
        let json = serde_json::to_string(&bday).unwrap();
        assert_eq!(json, "\"01.02.2000\"");
        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bday);
    }
}
