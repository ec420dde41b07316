// Mock implementations for testing
//
// Provides mock services that can be injected into the app for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::{BaseMailer, OutboundEmail};

// =============================================================================
// Mock Mailer
// =============================================================================

/// Records every send and can be configured to fail, so tests can assert
/// both the number of delivery attempts and the handler's behavior when
/// the email capability is down.
pub struct MockMailer {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    fail_with: Option<String>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    /// A mailer whose every send fails with the given reason
    pub fn failing(reason: &str) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(reason.to_string()),
        }
    }

    /// Get all emails handed to this mailer (including failed sends)
    pub fn sent_emails(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of delivery attempts made
    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMailer for MockMailer {
    async fn send_email(&self, email: &OutboundEmail) -> Result<()> {
        // Record the call
        self.sent.lock().unwrap().push(email.clone());

        match &self.fail_with {
            Some(reason) => Err(anyhow::anyhow!("{}", reason)),
            None => Ok(()),
        }
    }
}
