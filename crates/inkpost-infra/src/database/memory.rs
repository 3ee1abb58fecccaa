//! In-memory repositories - used when no database is configured.
//!
//! Note: Data is lost on process restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use inkpost_core::domain::{Post, User, UserStatus};
use inkpost_core::error::RepoError;
use inkpost_core::ports::{BaseRepository, PostRepository, UserRepository};

/// Rows keyed by id, plus the last id handed out.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    /// Resolve the id to store under, allocating one for new rows.
    fn key_for(&mut self, id: Option<i64>) -> i64 {
        match id {
            Some(id) => {
                self.last_id = self.last_id.max(id);
                id
            }
            None => {
                self.last_id += 1;
                self.last_id
            }
        }
    }
}

/// In-memory user store enforcing unique emails like the database does.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, i64> for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, mut entity: User) -> Result<User, RepoError> {
        let mut table = self.table.write().await;

        let taken = table
            .rows
            .values()
            .any(|u| u.email == entity.email && u.id != entity.id);
        if taken {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        let id = table.key_for(entity.id);
        entity.id = Some(id);
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).filter(|u| u.status == status).cloned())
    }

    async fn find_by_email_and_status(
        &self,
        email: &str,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|u| u.email == email && u.status == status)
            .cloned())
    }
}

/// In-memory post store.
///
/// Posts hold their writer by id; the writer is re-read from the user store
/// on every load so profile edits show up on existing posts.
pub struct InMemoryPostRepository {
    users: Arc<InMemoryUserRepository>,
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            users,
            table: RwLock::new(Table::default()),
        }
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let post = {
            let table = self.table.read().await;
            table.rows.get(&id).cloned()
        };
        let Some(mut post) = post else {
            return Ok(None);
        };

        if let Some(writer_id) = post.writer.id {
            if let Some(writer) = self.users.find_by_id(writer_id).await? {
                post.writer = writer;
            }
        }
        Ok(Some(post))
    }

    async fn save(&self, mut entity: Post) -> Result<Post, RepoError> {
        let writer_id = entity
            .writer
            .id
            .ok_or_else(|| RepoError::Constraint("post writer has not been saved".to_string()))?;
        if self.users.find_by_id(writer_id).await?.is_none() {
            return Err(RepoError::Constraint(format!(
                "writer {writer_id} does not exist"
            )));
        }

        let mut table = self.table.write().await;
        let id = table.key_for(entity.id);
        entity.id = Some(id);
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }
}

impl PostRepository for InMemoryPostRepository {}
