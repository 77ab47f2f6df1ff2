//! SMTP mailer implementation.
//!
//! Wraps lettre's `AsyncSmtpTransport<Tokio1Executor>` bound to the
//! configured host and port, authenticating with the credentials supplied at
//! run time.

use super::{Mailer, OutgoingEmail};
use crate::config::Config;
use crate::error::{MailError, MailResult};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Mailer backed by an authenticated SMTP connection.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailer {
    /// Build an SMTP mailer from the run configuration and credentials.
    ///
    /// When `config.smtp_secure` is set the connection is wrapped in
    /// implicit TLS (the port-465 model); otherwise it is plaintext, for
    /// local relays such as Mailpit. Mail is sent from
    /// `config.from_address` when configured, else from the authenticated
    /// username.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::BuildFailed`] when TLS parameters for the host
    /// cannot be established.
    pub fn new(config: &Config, username: &str, password: &str) -> MailResult<Self> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .credentials(Credentials::new(username.to_string(), password.to_string()));

        if config.smtp_secure {
            let tls = TlsParameters::new(config.smtp_host.clone())
                .map_err(|e| MailError::BuildFailed(format!("TLS setup failed: {e}")))?;
            builder = builder.tls(Tls::Wrapper(tls));
        }

        let from_address = config
            .from_address
            .clone()
            .unwrap_or_else(|| username.to_string());

        Ok(Self {
            transport: builder.build(),
            from_address,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> MailResult<()> {
        let from: Mailbox = self
            .from_address
            .parse()
            .map_err(|e| MailError::InvalidAddress(format!("{}: {e}", self.from_address)))?;
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| MailError::InvalidAddress(format!("{}: {e}", email.to)))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(&email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.text_body.clone())
            .map_err(|e| MailError::BuildFailed(e.to_string()))?;

        // The transport result only says the server accepted the message;
        // delivery receipts are not inspected.
        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::SendFailed(e.to_string()))?;

        Ok(())
    }
}
