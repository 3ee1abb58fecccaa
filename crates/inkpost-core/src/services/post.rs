use std::sync::Arc;

use crate::domain::{Post, PostCreate, PostUpdate};
use crate::error::DomainError;
use crate::ports::{Clock, PostRepository, UserRepository};

/// Post lifecycle: authoring and editing.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts,
            users,
            clock,
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Posts", id))
    }

    pub async fn create(&self, create: PostCreate) -> Result<Post, DomainError> {
        let writer = self
            .users
            .find_by_id(create.writer_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Users", create.writer_id))?;

        let post = Post::from_create(writer, create, self.clock.as_ref());
        let post = self.posts.save(post).await?;
        tracing::info!(post_id = ?post.id, "Post created");
        Ok(post)
    }

    pub async fn update(&self, id: i64, update: PostUpdate) -> Result<Post, DomainError> {
        let post = self.get_by_id(id).await?.update(update, self.clock.as_ref());
        Ok(self.posts.save(post).await?)
    }
}
