//! Roster record parser.
//!
//! Turns one raw CSV line into a [`Contact`]. Pure, no I/O.

use crate::error::ParseError;
use crate::models::Contact;
use chrono::NaiveDate;

/// Parse a single roster line into a [`Contact`].
///
/// The line must hold exactly four comma-separated fields, in file order:
/// last name, first name, birthday (`YYYY/MM/DD`), email. Fields are trimmed
/// of surrounding whitespace. Note the column swap: the file leads with the
/// last name, but the struct is first-name-first.
///
/// # Errors
///
/// Returns a [`ParseError`] when the field count is wrong, a birthday
/// component is not an integer, or the components name no real calendar
/// date. No quoting or escaping of commas within fields is supported.
pub fn parse_line(line: &str) -> Result<Contact, ParseError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Err(ParseError::FieldCount(fields.len()));
    }

    let last_name = fields[0].trim();
    let first_name = fields[1].trim();
    let birthday = parse_birthday(fields[2].trim())?;
    let email = fields[3].trim();

    Ok(Contact::new(first_name, last_name, birthday, email))
}

/// Parse a `YYYY/MM/DD` birthday field. Months are 1-12 as written.
fn parse_birthday(field: &str) -> Result<NaiveDate, ParseError> {
    let parts: Vec<&str> = field.split('/').collect();
    if parts.len() != 3 {
        return Err(ParseError::BirthdayFormat(field.to_string()));
    }

    let year: i32 = parse_component(parts[0])?;
    let month: u32 = parse_component(parts[1])?;
    let day: u32 = parse_component(parts[2])?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ParseError::InvalidDate(field.to_string()))
}

fn parse_component<T: std::str::FromStr>(part: &str) -> Result<T, ParseError> {
    part.parse::<T>()
        .map_err(|_| ParseError::InvalidNumber(part.to_string()))
}
