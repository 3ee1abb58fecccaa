//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod mail;
mod repository;

pub use clock::{Clock, UuidGenerator};
pub use mail::{MailError, MailMessage, MailSender};
pub use repository::{BaseRepository, PostRepository, UserRepository};
