use async_trait::async_trait;
use birthday_greeter::error::{MailError, MailResult};
use birthday_greeter::mailer::{Mailer, OutgoingEmail};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Mock mailer for testing.
///
/// Records every message it is asked to send and can be configured to fail
/// for specific recipient addresses, so tests can verify both the exact
/// dispatch arguments and failure-isolation behavior.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    attempts: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockMailer {
    /// Create a new mock mailer that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sends to `email` fail with a transport error.
    pub fn fail_for(&self, email: &str) {
        let mut failing = self.failing.lock().unwrap();
        failing.insert(email.to_string());
    }

    /// All messages accepted so far, in send order.
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Total number of send attempts, including failed ones.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutgoingEmail) -> MailResult<()> {
        *self.attempts.lock().unwrap() += 1;

        if self.failing.lock().unwrap().contains(&email.to) {
            return Err(MailError::SendFailed(format!(
                "mock transport refused {}",
                email.to
            )));
        }

        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}
