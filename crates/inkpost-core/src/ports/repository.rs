use async_trait::async_trait;

use crate::domain::{Post, User, UserStatus};
use crate::error::RepoError;

/// Generic repository trait shared by all aggregates.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity. Entities without an id are inserted and get one assigned.
    async fn save(&self, entity: T) -> Result<T, RepoError>;
}

/// User repository with status-filtered lookups.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i64> {
    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError>;

    async fn find_by_email_and_status(
        &self,
        email: &str,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError>;
}

/// Post repository. Loaded posts carry their writer.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {}
