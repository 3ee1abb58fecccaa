//! Outgoing mail port.

use async_trait::async_trait;

/// A plain-text message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mail sender trait - abstraction over SMTP or an in-process outbox.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, message: MailMessage) -> Result<(), MailError>;
}

/// Mail delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Failed to send message: {0}")]
    Send(String),
}
