//! Test doubles for the service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Post, User, UserStatus};
use crate::error::RepoError;
use crate::ports::{
    BaseRepository, Clock, MailError, MailMessage, MailSender, PostRepository, UserRepository,
    UuidGenerator,
};

pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.0).unwrap()
    }
}

pub struct FixedUuid(pub &'static str);

impl UuidGenerator for FixedUuid {
    fn random(&self) -> String {
        self.0.to_string()
    }
}

#[derive(Default)]
pub struct FakeMailSender {
    outbox: Mutex<Vec<MailMessage>>,
}

impl FakeMailSender {
    pub fn sent(&self) -> Vec<MailMessage> {
        self.outbox.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for FakeMailSender {
    async fn send(&self, message: MailMessage) -> Result<(), MailError> {
        self.outbox.lock().unwrap().push(message);
        Ok(())
    }
}

fn upsert<T: Clone>(
    rows: &mut Vec<T>,
    mut row: T,
    id_of: fn(&T) -> Option<i64>,
    assign: fn(&mut T, i64),
) -> T {
    match id_of(&row) {
        Some(id) => rows.retain(|r| id_of(r) != Some(id)),
        None => {
            let next = rows.iter().filter_map(id_of).max().unwrap_or(0) + 1;
            assign(&mut row, next);
        }
    }
    rows.push(row.clone());
    row
}

#[derive(Default)]
pub struct FakeUserRepository {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl BaseRepository<User, i64> for FakeUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn save(&self, entity: User) -> Result<User, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(upsert(&mut rows, entity, |u| u.id, |u, id| u.id = Some(id)))
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|u| u.id == Some(id) && u.status == status)
            .cloned())
    }

    async fn find_by_email_and_status(
        &self,
        email: &str,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|u| u.email == email && u.status == status)
            .cloned())
    }
}

#[derive(Default)]
pub struct FakePostRepository {
    rows: Mutex<Vec<Post>>,
}

#[async_trait]
impl BaseRepository<Post, i64> for FakePostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(upsert(&mut rows, entity, |p| p.id, |p, id| p.id = Some(id)))
    }
}

impl PostRepository for FakePostRepository {}
