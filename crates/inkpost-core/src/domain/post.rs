use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;
use crate::error::DomainError;
use crate::ports::Clock;

/// Input for writing a new post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCreate {
    pub writer_id: i64,
    pub content: String,
}

impl PostCreate {
    pub fn new(writer_id: i64, content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::Validation("Content is required".to_string()));
        }
        Ok(Self { writer_id, content })
    }
}

/// Replacement content for an existing post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUpdate {
    pub content: String,
}

impl PostUpdate {
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::Validation("Content is required".to_string()));
        }
        Ok(Self { content })
    }
}

/// Post entity - a piece of content authored by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<i64>,
    pub content: String,
    /// The author. Referenced, not owned: the same user backs many posts.
    pub writer: User,
    pub created_at: DateTime<Utc>,
    /// `None` until the first edit.
    pub modified_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn from_create(writer: User, create: PostCreate, clock: &dyn Clock) -> Self {
        Self {
            id: None,
            content: create.content,
            writer,
            created_at: clock.now(),
            modified_at: None,
        }
    }

    pub fn update(self, update: PostUpdate, clock: &dyn Clock) -> Self {
        Self {
            content: update.content,
            modified_at: Some(clock.now()),
            ..self
        }
    }
}
