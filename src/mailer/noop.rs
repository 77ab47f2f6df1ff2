//! No-op mailer implementation.
//!
//! Logs the would-be send and succeeds without touching the network. Used
//! for dry runs.

use super::{Mailer, OutgoingEmail};
use crate::error::MailResult;
use async_trait::async_trait;

/// Mailer that logs instead of sending.
#[derive(Debug, Clone, Default)]
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, email: &OutgoingEmail) -> MailResult<()> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "dry run: skipping send"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_always_succeeds() {
        let mailer = NoopMailer;
        let email = OutgoingEmail {
            to: "john.doe@foobar.com".to_string(),
            subject: "Happy birthday!".to_string(),
            text_body: "Happy birthday, dear John!".to_string(),
        };

        assert!(mailer.send(&email).await.is_ok());
    }
}
