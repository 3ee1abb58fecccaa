//! # Inkpost Shared
//!
//! Request and response types of the public HTTP API.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
