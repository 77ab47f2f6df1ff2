//! Contact model representing one person on the birthday roster.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A contact loaded from the roster file.
///
/// Contacts are immutable once constructed: the parser either produces a
/// fully populated value or fails, never a partial one. They live in memory
/// for the duration of a single run and are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// First name, used in the greeting body
    pub first_name: String,

    /// Last name, informational only
    pub last_name: String,

    /// Date of birth; the year is carried but never compared
    pub birthday: NaiveDate,

    /// Destination email address (no format validation is applied)
    pub email: String,
}

impl Contact {
    /// Create a new contact.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthday: NaiveDate,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthday,
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contact_new() {
        let contact = Contact::new("John", "Doe", date(1982, 10, 8), "john.doe@foobar.com");
        assert_eq!(contact.first_name, "John");
        assert_eq!(contact.last_name, "Doe");
        assert_eq!(contact.birthday, date(1982, 10, 8));
        assert_eq!(contact.email, "john.doe@foobar.com");
    }

    #[test]
    fn test_contact_equality() {
        let a = Contact::new("John", "Doe", date(1982, 10, 8), "john.doe@foobar.com");
        let b = a.clone();
        assert_eq!(a, b);
    }
}
