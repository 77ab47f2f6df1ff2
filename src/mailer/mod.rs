//! Mail sending capability.
//!
//! The [`Mailer`] trait abstracts the single operation the greeter needs
//! from a mail transport, enabling different implementations (SMTP, no-op,
//! recording mocks in tests) without touching the rest of the pipeline.

mod noop;
mod smtp;

use crate::error::MailResult;
use async_trait::async_trait;
pub use noop::NoopMailer;
use serde::{Deserialize, Serialize};
pub use smtp::SmtpMailer;

/// A fully assembled outbound message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Destination address
    pub to: String,

    /// Subject line
    pub subject: String,

    /// Plain-text body
    pub text_body: String,
}

/// Capability for sending one email.
///
/// Implementations own their sender ("from") policy; callers only supply the
/// message. A successful return means the transport accepted the message,
/// not that delivery is confirmed.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a single email.
    async fn send(&self, email: &OutgoingEmail) -> MailResult<()>;
}
