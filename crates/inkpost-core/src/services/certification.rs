use std::sync::Arc;

use crate::error::DomainError;
use crate::ports::{MailMessage, MailSender};

const SUBJECT: &str = "Please certify your email address";

/// Sends the account certification mail.
#[derive(Clone)]
pub struct CertificationService {
    mail_sender: Arc<dyn MailSender>,
    base_url: String,
}

impl CertificationService {
    /// `base_url` is the public origin of the API, e.g. `http://localhost:8080`.
    pub fn new(mail_sender: Arc<dyn MailSender>, base_url: impl Into<String>) -> Self {
        Self {
            mail_sender,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn certification_url(&self, user_id: i64, certification_code: &str) -> String {
        format!(
            "{}/api/users/{}/verify?certificationCode={}",
            self.base_url, user_id, certification_code
        )
    }

    pub async fn send(
        &self,
        email: &str,
        user_id: i64,
        certification_code: &str,
    ) -> Result<(), DomainError> {
        let message = MailMessage {
            to: email.to_string(),
            subject: SUBJECT.to_string(),
            body: format!(
                "Please click the following link to certify your email address: {}",
                self.certification_url(user_id, certification_code)
            ),
        };

        self.mail_sender
            .send(message)
            .await
            .map_err(|e| DomainError::Mail(e.to_string()))?;

        tracing::debug!(user_id, "Certification mail sent");
        Ok(())
    }
}
