//! # Inkpost Core
//!
//! The domain layer of the Inkpost backend: user and post lifecycles.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
