//! Lifecycle services - orchestrate entities, repositories and notifications.

mod certification;
mod post;
mod user;

#[cfg(test)]
mod fakes;

pub use certification::CertificationService;
pub use post::PostService;
pub use user::UserService;
