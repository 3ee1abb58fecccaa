//! Mail senders - SMTP delivery and an in-memory outbox fallback.

mod memory;

#[cfg(feature = "smtp")]
mod smtp;

pub use memory::InMemoryMailSender;

#[cfg(feature = "smtp")]
pub use smtp::{SmtpConfig, SmtpMailSender};
