//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, TryIntoModel};

use inkpost_core::domain::{Post, User, UserStatus};
use inkpost_core::error::RepoError;
use inkpost_core::ports::{BaseRepository, PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_write_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// Mask the local part of an email to keep PII out of logs.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) if local.len() > 1 => format!("{first}***@{domain}"),
            _ => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find_by_id(id)
            .filter(user::Column::Status.eq(user::Status::from(status)))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email_and_status(
        &self,
        email: &str,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), status = status.as_str(), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::Status.eq(user::Status::from(status)))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

/// PostgreSQL post repository. Posts are loaded together with their writer.
pub struct PostgresPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for PostgresPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        match result {
            Some((post, Some(writer))) => Ok(Some(post.into_domain(writer.into()))),
            Some((post, None)) => Err(RepoError::Query(format!(
                "post {} references missing writer {}",
                post.id, post.writer_id
            ))),
            None => Ok(None),
        }
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let writer_id = entity
            .writer
            .id
            .ok_or_else(|| RepoError::Constraint("post writer has not been saved".to_string()))?;

        let saved = post::active_model(&entity, writer_id)
            .save(&self.db)
            .await
            .map_err(map_write_err)?;
        let model = saved
            .try_into_model()
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into_domain(entity.writer))
    }
}

impl PostRepository for PostgresPostRepository {}
