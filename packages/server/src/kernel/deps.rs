//! Concrete service adapters (using traits for testability)

use anyhow::Result;
use async_trait::async_trait;
use resend::models::SendEmailRequest;
use resend::ResendService;
use std::sync::Arc;

use crate::kernel::traits::{BaseMailer, OutboundEmail};

// =============================================================================
// ResendService Adapter (implements BaseMailer trait)
// =============================================================================

/// Wrapper around ResendService that implements the BaseMailer trait
pub struct ResendAdapter(pub Arc<ResendService>);

impl ResendAdapter {
    pub fn new(service: Arc<ResendService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseMailer for ResendAdapter {
    async fn send_email(&self, email: &OutboundEmail) -> Result<()> {
        let request = SendEmailRequest {
            from: email.from.clone(),
            to: email.to.clone(),
            subject: email.subject.clone(),
            html: email.html.clone(),
        };

        self.0
            .send_email(&request)
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}
