//! Error types for the birthday greeter.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur while parsing a single roster line.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The line does not have exactly four comma-separated fields
    #[error("expected 4 comma-separated fields, found {0}")]
    FieldCount(usize),

    /// The birthday is not three `/`-separated components
    #[error("expected birthday as YYYY/MM/DD, got: {0}")]
    BirthdayFormat(String),

    /// A birthday component is not a valid integer
    #[error("invalid number in birthday: {0}")]
    InvalidNumber(String),

    /// The year/month/day triple names no real calendar date
    #[error("no such calendar date: {0}")]
    InvalidDate(String),
}

/// Errors that can occur while loading the roster file.
#[derive(Error, Debug)]
pub enum RosterError {
    /// The roster file is missing or unreadable
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    /// A roster line failed to parse; the whole load is aborted
    #[error("roster line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// Errors that can occur while building or sending a mail message.
#[derive(Error, Debug)]
pub enum MailError {
    /// A sender or recipient address was rejected by the message builder
    #[error("invalid mail address: {0}")]
    InvalidAddress(String),

    /// The message could not be assembled
    #[error("failed to build message: {0}")]
    BuildFailed(String),

    /// The transport failed to hand the message off
    #[error("failed to send message: {0}")]
    SendFailed(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RosterError
pub type RosterResult<T> = Result<T, RosterError>;

/// Convenience type alias for Results with MailError
pub type MailResult<T> = Result<T, MailError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
