//! Roster file loader.
//!
//! Reads the roster file and maps its data rows through the record parser.

use crate::error::{RosterError, RosterResult};
use crate::models::Contact;
use crate::roster::parser;
use std::path::Path;

/// Load the contact roster from a CSV file.
///
/// The whole file is read as text and split into lines. Lines that are blank
/// after trimming are ignored. The first non-blank line is dropped
/// unconditionally as the header row (a positional skip, regardless of its
/// content); every remaining line is parsed in original order.
///
/// # Errors
///
/// Returns [`RosterError::Io`] when the file is missing or unreadable, and
/// [`RosterError::Parse`] (tagged with the 1-based source line number) on
/// the first malformed row. A parse failure aborts the whole load; no
/// partial roster is ever returned.
pub async fn load(path: impl AsRef<Path>) -> RosterResult<Vec<Contact>> {
    let contents = tokio::fs::read_to_string(path).await?;

    let mut rows = contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    // Header row: skipped by position, not by content.
    let _header = rows.next();

    let mut contacts = Vec::new();
    for (index, line) in rows {
        let contact = parser::parse_line(line).map_err(|source| RosterError::Parse {
            line: index + 1,
            source,
        })?;
        contacts.push(contact);
    }

    Ok(contacts)
}
