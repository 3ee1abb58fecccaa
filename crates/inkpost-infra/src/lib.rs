//! # Inkpost Infrastructure
//!
//! Concrete implementations of the ports defined in `inkpost-core`.
//! This crate contains database, mail, and system service integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM
//! - `smtp` - Certification mail delivery over SMTP via lettre

pub mod database;
pub mod mail;
pub mod system;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryPostRepository, InMemoryUserRepository};
pub use mail::InMemoryMailSender;
pub use system::{FixedClock, FixedUuidGenerator, RandomUuidGenerator, SystemClock};

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresUserRepository, connect};

#[cfg(feature = "smtp")]
pub use mail::{SmtpConfig, SmtpMailSender};
