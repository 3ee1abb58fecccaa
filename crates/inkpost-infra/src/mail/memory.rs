//! In-memory mail outbox - used when SMTP is not configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use inkpost_core::ports::{MailError, MailMessage, MailSender};

/// Keeps every message instead of delivering it, and logs it so the
/// certification link can be followed during local development.
#[derive(Default)]
pub struct InMemoryMailSender {
    outbox: RwLock<Vec<MailMessage>>,
}

impl InMemoryMailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far, oldest first.
    pub async fn sent(&self) -> Vec<MailMessage> {
        self.outbox.read().await.clone()
    }
}

#[async_trait]
impl MailSender for InMemoryMailSender {
    async fn send(&self, message: MailMessage) -> Result<(), MailError> {
        tracing::info!(
            subject = %message.subject,
            body = %message.body,
            "Mail captured in memory outbox"
        );
        self.outbox.write().await.push(message);
        Ok(())
    }
}
