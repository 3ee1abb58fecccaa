//! Domain entities - the core business objects.

mod post;
mod user;

pub use post::{Post, PostCreate, PostUpdate};
pub use user::{User, UserCreate, UserStatus, UserUpdate};
