//! Greeting service.
//!
//! Builds birthday messages and orchestrates one run of the pipeline:
//! load roster, match against the reference date, dispatch to every match
//! concurrently.

use crate::error::{MailResult, RosterResult};
use crate::mailer::{Mailer, OutgoingEmail};
use crate::matching;
use crate::models::Contact;
use crate::roster;
use chrono::NaiveDate;
use futures::future;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// Subject line of every birthday greeting.
const GREETING_SUBJECT: &str = "Happy birthday!";

/// Build the greeting message for a contact.
pub fn build_greeting(contact: &Contact) -> OutgoingEmail {
    OutgoingEmail {
        to: contact.email.clone(),
        subject: GREETING_SUBJECT.to_string(),
        text_body: format!("Happy birthday, dear {}!", contact.first_name),
    }
}

/// Send one birthday wish through the given capability.
///
/// The capability's result is returned unchanged: no retry, no fallback.
pub async fn send_birthday_wish(mailer: &dyn Mailer, contact: &Contact) -> MailResult<()> {
    mailer.send(&build_greeting(contact)).await
}

/// One dispatch that failed during a run.
#[derive(Debug, Clone)]
pub struct DispatchFailure {
    /// Destination address of the failed dispatch
    pub email: String,

    /// Human-readable failure reason
    pub reason: String,
}

/// Outcome report for one run.
///
/// Dispatch failures are collected here rather than aborting the run, so a
/// single bad address never masks greetings that were already sent.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of contacts whose birthday matched the reference date
    pub matched: usize,

    /// Number of greetings the transport accepted
    pub sent: usize,

    /// Dispatches the transport rejected
    pub failures: Vec<DispatchFailure>,
}

impl RunSummary {
    /// True when every attempted dispatch succeeded.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Orchestrates one run of the birthday greeting pipeline.
pub struct GreetingService {
    mailer: Arc<dyn Mailer>,
}

impl GreetingService {
    /// Create a new greeting service with the given mail capability.
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Execute one run: load the roster, select today's birthdays, and
    /// dispatch a greeting to every match.
    ///
    /// All dispatches are launched concurrently and the run completes only
    /// once every one of them has settled. Individual dispatch failures are
    /// logged and recorded in the [`RunSummary`]; they never prevent other
    /// dispatches.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::RosterError`] when the roster file cannot
    /// be read or a line fails to parse. Either aborts the run before any
    /// dispatch is attempted.
    pub async fn run(
        &self,
        roster_path: impl AsRef<Path>,
        reference: NaiveDate,
    ) -> RosterResult<RunSummary> {
        let contacts = roster::load(roster_path).await?;
        let matched = matching::contacts_with_birthday(reference, &contacts);

        info!(
            roster = contacts.len(),
            matched = matched.len(),
            %reference,
            "roster loaded"
        );

        let outcomes = future::join_all(matched.iter().map(|contact| async move {
            let result = send_birthday_wish(self.mailer.as_ref(), contact).await;
            (contact, result)
        }))
        .await;

        let mut summary = RunSummary {
            matched: matched.len(),
            ..RunSummary::default()
        };

        for (contact, result) in outcomes {
            match result {
                Ok(()) => {
                    info!(to = %contact.email, "greeting sent");
                    summary.sent += 1;
                }
                Err(e) => {
                    error!(to = %contact.email, error = %e, "greeting failed");
                    summary.failures.push(DispatchFailure {
                        email: contact.email.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(summary)
    }
}
