//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format birthdays are written in: `DD.MM.YYYY`.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// An optional birthday, validated at construction time.
///
/// The empty string constructs the unset state; any non-empty input must
/// parse as a calendar date in `DD.MM.YYYY` form. Single-digit day or
/// month components are accepted and normalize to two digits on display.
///
/// # Example
///
/// ```
/// use addrbook::domain::Birthday;
///
/// let birthday = Birthday::new("24.06.1990").unwrap();
/// assert!(birthday.is_set());
/// assert_eq!(birthday.to_string(), "24.06.1990");
///
/// let unset = Birthday::new("").unwrap();
/// assert!(!unset.is_set());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Birthday(Option<NaiveDate>);

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - The empty string yields the unset state
    /// - Any other input must parse as `DD.MM.YYYY` with valid
    ///   calendar values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if a non-empty input
    /// does not parse as a date.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let birthday = birthday.into();

        if birthday.is_empty() {
            return Ok(Self(None));
        }

        let date = NaiveDate::parse_from_str(&birthday, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(birthday))?;

        Ok(Self(Some(date)))
    }

    /// The unset state.
    pub fn unset() -> Self {
        Self(None)
    }

    /// Whether a birthday has been set.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// The stored date, if set.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// The next occurrence of the stored month/day on or after `today`.
    ///
    /// Returns `None` when no birthday is set. A February 29 birthday
    /// falls on March 1 in years without a leap day.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let date = self.0?;

        let this_year = Self::occurrence_in(today.year(), date);
        if this_year >= today {
            Some(this_year)
        } else {
            Some(Self::occurrence_in(today.year() + 1, date))
        }
    }

    /// The month/day of `date` projected into `year`.
    fn occurrence_in(year: i32, date: NaiveDate) -> NaiveDate {
        // Only Feb 29 can fail to exist; shift it to Mar 1.
        NaiveDate::from_ymd_opt(year, date.month(), date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .expect("March 1 exists in every year")
    }
}

// Serde support - serialize as the formatted string, or null when unset
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(date) => serializer.serialize_some(&date.format(BIRTHDAY_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }
}

// Serde support - deserialize from an optional string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => Birthday::new(s).map_err(serde::de::Error::custom),
            None => Ok(Birthday::unset()),
        }
    }
}

// Display support - formatted date, or the empty string when unset
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(BIRTHDAY_FORMAT)),
            None => Ok(()),
        }
    }
}
