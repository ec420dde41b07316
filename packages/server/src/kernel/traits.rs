// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
//
// Naming convention: Base* for trait names (e.g., BaseMailer)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Mailer Trait (Infrastructure - outbound email delivery)
// =============================================================================

/// An email ready to hand to the delivery provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[async_trait]
pub trait BaseMailer: Send + Sync {
    /// Send one email. No retry semantics; callers decide what a failure
    /// means.
    async fn send_email(&self, email: &OutboundEmail) -> Result<()>;
}
