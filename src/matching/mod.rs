//! Birthday matching.
//!
//! Pure selection of the contacts whose birthday falls on a reference date.

use crate::models::Contact;
use chrono::{Datelike, NaiveDate};

/// Return the contacts whose birthday falls on `reference`.
///
/// A contact matches when its birthday has the same month and day-of-month
/// as the reference date. The birth year is never compared, so a contact
/// matches once per year. Input order is preserved; filtering never
/// reorders.
///
/// Contacts born on February 29 match only when the reference date itself
/// is February 29.
pub fn contacts_with_birthday(reference: NaiveDate, contacts: &[Contact]) -> Vec<Contact> {
    contacts
        .iter()
        .filter(|contact| {
            contact.birthday.month() == reference.month()
                && contact.birthday.day() == reference.day()
        })
        .cloned()
        .collect()
}
