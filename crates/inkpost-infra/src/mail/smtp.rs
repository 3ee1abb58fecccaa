//! SMTP mail sender using lettre.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use inkpost_core::ports::{MailError, MailMessage, MailSender};

/// SMTP configuration.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Sender mailbox, e.g. `Inkpost <noreply@example.com>`.
    pub from: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// STARTTLS relay when true; plain connection for local catch-all servers otherwise.
    pub use_tls: bool,
}

pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailSender {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| MailError::Build(format!("Invalid from address: {e}")))?;

        let builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| MailError::Build(format!("Failed to create SMTP relay: {e}")))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };
        let mut builder = builder.port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        tracing::info!(host = %config.host, port = config.port, "SMTP transport configured");

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn build_message(&self, message: &MailMessage) -> Result<Message, MailError> {
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|e| MailError::Build(format!("Invalid to address: {e}")))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send(&self, message: MailMessage) -> Result<(), MailError> {
        let email = self.build_message(&message)?;

        self.transport.send(email).await.map_err(|e| {
            tracing::error!(error = %e, "SMTP delivery failed");
            MailError::Send(e.to_string())
        })?;

        tracing::debug!(subject = %message.subject, "Mail delivered over SMTP");
        Ok(())
    }
}
