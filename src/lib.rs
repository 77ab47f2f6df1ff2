//! Birthday Greeter - a batch job that emails birthday wishes.
//!
//! Reads a roster of contacts from a comma-delimited file, selects the
//! contacts whose birthday falls on a reference date, and sends each one a
//! congratulatory email over SMTP. Intended to be invoked once a day by an
//! external scheduler; it keeps no state between runs.
//!
//! # Architecture
//!
//! - **models**: the `Contact` data structure
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **roster**: record parser and roster file loader
//! - **matching**: pure birthday selection against a reference date
//! - **mailer**: the `Mailer` capability trait with SMTP and no-op
//!   implementations
//! - **services**: greeting construction and the run orchestrator

pub mod config;
pub mod error;
pub mod mailer;
pub mod matching;
pub mod models;
pub mod roster;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, MailError, ParseError, RosterError};
pub use mailer::{Mailer, NoopMailer, OutgoingEmail, SmtpMailer};
pub use models::Contact;
pub use services::{GreetingService, RunSummary};
