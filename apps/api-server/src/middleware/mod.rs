//! Middleware modules.

pub mod email;
pub mod error;
