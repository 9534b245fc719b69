//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use std::fmt;

/// A single contact: a name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// The name is the record's identity and never changes once the record
/// exists. Phones keep insertion order and may contain duplicates; all
/// phone lookups match the first entry with an exactly equal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Birthday,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<ContactName>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: Birthday::unset(),
        }
    }

    /// Create a new record with a birthday string (`DD.MM.YYYY`, or the
    /// empty string for none).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` via `BookError` if the
    /// birthday string is malformed.
    pub fn with_birthday(name: impl Into<ContactName>, birthday: &str) -> BookResult<Self> {
        Ok(Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: Birthday::new(birthday)?,
        })
    }

    /// Reassemble a record from already-validated parts. Used when
    /// decoding snapshots.
    pub(crate) fn from_parts(
        name: ContactName,
        phones: Vec<PhoneNumber>,
        birthday: Birthday,
    ) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    /// The record's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The record's phones, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The record's birthday.
    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> BookResult<()> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone whose value equals `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// The new number is appended before the old one is removed, so when
    /// `old == new` the call is a net no-op.
    ///
    /// # Errors
    ///
    /// Fails with `PhoneNotFound` when no phone equals `old`, and with
    /// `ValidationError::InvalidPhone` when `new` is malformed.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> BookResult<()> {
        if self.find_phone(old).is_none() {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }
        self.add_phone(new)?;
        self.remove_phone(old)
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Fails with `PhoneNotFound` when no phone matches.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the birthday with a newly validated value.
    pub fn set_birthday(&mut self, birthday: &str) -> BookResult<()> {
        self.birthday = Birthday::new(birthday)?;
        Ok(())
    }

    /// Days until the next occurrence of the birthday, counted from the
    /// local date. `Some(0)` when the birthday is today, `None` when no
    /// birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Same as [`days_to_birthday`](Self::days_to_birthday) but counted
    /// from an explicit date.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let next = self.birthday.next_occurrence(today)?;
        Some((next - today).num_days())
    }
}

// Display support - the canonical one-line rendering of a contact
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("Kate");
        assert_eq!(record.name().as_str(), "Kate");
        assert!(record.phones().is_empty());
        assert!(!record.birthday().is_set());
    }

    #[test]
    fn test_record_with_birthday() {
        let record = Record::with_birthday("Kate", "24.06.1990").unwrap();
        assert!(record.birthday().is_set());

        let record = Record::with_birthday("Kate", "").unwrap();
        assert!(!record.birthday().is_set());

        assert!(Record::with_birthday("Kate", "June 24").is_err());
    }

    #[test]
    fn test_add_and_find_phone() {
        let mut record = Record::new("Kate");
        record.add_phone("1234567890").unwrap();
        record.add_phone("1122334455").unwrap();

        assert!(record.find_phone("1234567890").is_some());
        assert!(record.find_phone("9999999999").is_none());
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = Record::new("Kate");
        assert!(record.add_phone("12345").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_edit_phone_replaces_first_match() {
        let mut record = Record::new("Kate");
        record.add_phone("1234567890").unwrap();
        record.edit_phone("1234567890", "0987654321").unwrap();

        assert!(record.find_phone("1234567890").is_none());
        assert!(record.find_phone("0987654321").is_some());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_missing_old_fails() {
        let mut record = Record::new("Kate");
        record.add_phone("1234567890").unwrap();

        let err = record.edit_phone("5555555555", "0987654321").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound(_)));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_same_value_is_noop() {
        let mut record = Record::new("Kate");
        record.add_phone("1234567890").unwrap();
        record.edit_phone("1234567890", "1234567890").unwrap();

        assert_eq!(record.phones().len(), 1);
        assert!(record.find_phone("1234567890").is_some());
    }

    #[test]
    fn test_remove_phone() {
        let mut record = Record::new("Kate");
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();

        record.remove_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 1);

        record.remove_phone("1234567890").unwrap();
        let err = record.remove_phone("1234567890").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound(_)));
    }

    #[test]
    fn test_set_birthday() {
        let mut record = Record::new("Kate");
        record.set_birthday("24.06.1990").unwrap();
        assert!(record.birthday().is_set());

        record.set_birthday("").unwrap();
        assert!(!record.birthday().is_set());

        assert!(record.set_birthday("garbage").is_err());
    }

    #[test]
    fn test_days_to_birthday_unset() {
        let record = Record::new("Kate");
        assert_eq!(record.days_to_birthday(), None);
    }

    #[test]
    fn test_days_to_birthday_today_is_zero() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 24).unwrap();
        let record = Record::with_birthday("Kate", "24.06.1990").unwrap();
        assert_eq!(record.days_to_birthday_from(today), Some(0));
    }

    #[test]
    fn test_days_to_birthday_on_local_date_is_zero() {
        let today = Local::now().date_naive();
        let birthday = today.format("%d.%m.%Y").to_string();
        let record = Record::with_birthday("Kate", &birthday).unwrap();
        assert_eq!(record.days_to_birthday(), Some(0));
    }

    #[test]
    fn test_days_to_birthday_counts_forward() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let record = Record::with_birthday("Kate", "24.06.1990").unwrap();
        assert_eq!(record.days_to_birthday_from(today), Some(4));
    }

    #[test]
    fn test_days_to_birthday_wraps_past_occurrence() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 25).unwrap();
        let record = Record::with_birthday("Kate", "24.06.1990").unwrap();
        // 2025-06-24 is 364 days after 2024-06-25.
        assert_eq!(record.days_to_birthday_from(today), Some(364));
    }

    #[test]
    fn test_display() {
        let mut record = Record::new("Kate");
        record.add_phone("1234567890").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Kate, phones: 1234567890"
        );

        record.add_phone("1122334455").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Kate, phones: 1234567890; 1122334455"
        );
    }

    #[test]
    fn test_display_no_phones() {
        let record = Record::new("Don");
        assert_eq!(record.to_string(), "Contact name: Don, phones: ");
    }
}
