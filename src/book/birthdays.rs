//! Anniversary arithmetic for the upcoming-birthdays report.

use crate::domain::birthday::DATE_FORMAT;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// A contact whose birthday falls inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,

    /// The actual anniversary
    pub date: NaiveDate,

    /// The day to congratulate on: the anniversary, or the following
    /// Monday when it falls on a weekend
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn new(name: &str, date: NaiveDate) -> Self {
        let shift = match date.weekday() {
            Weekday::Sat => 2,
            Weekday::Sun => 1,
            _ => 0,
        };
        Self {
            name: name.to_string(),
            date,
            congratulation_date: date + Duration::days(shift),
        }
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}

/// The anniversary of `birth` in `year`; 29 February maps to 1 March in
/// common years.
fn anniversary(birth: NaiveDate, year: i32) -> NaiveDate {
    birth
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth)
}

/// First anniversary of `birth` on or after `today`.
pub fn next_occurrence(birth: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary(birth, today.year());
    if this_year < today {
        anniversary(birth, today.year() + 1)
    } else {
        this_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_occurrence() {
        assert_eq!(
            next_occurrence(date(1990, 6, 15), date(2024, 6, 10)),
            date(2024, 6, 15)
        );
        assert_eq!(
            next_occurrence(date(1990, 6, 10), date(2024, 6, 10)),
            date(2024, 6, 10)
        );
        assert_eq!(
            next_occurrence(date(1990, 6, 1), date(2024, 6, 10)),
            date(2025, 6, 1)
        );
    }

    #[test]
    fn test_leap_day_in_common_year() {
        assert_eq!(
            next_occurrence(date(1992, 2, 29), date(2025, 2, 20)),
            date(2025, 3, 1)
        );
        assert_eq!(
            next_occurrence(date(1992, 2, 29), date(2024, 2, 20)),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn test_weekend_shift() {
        // 2024-06-15 is a Saturday, 2024-06-16 a Sunday.
        assert_eq!(
            UpcomingBirthday::new("A", date(2024, 6, 15)).congratulation_date,
            date(2024, 6, 17)
        );
        assert_eq!(
            UpcomingBirthday::new("A", date(2024, 6, 16)).congratulation_date,
            date(2024, 6, 17)
        );
        assert_eq!(
            UpcomingBirthday::new("A", date(2024, 6, 14)).congratulation_date,
            date(2024, 6, 14)
        );
    }
}
