use std::sync::Arc;

use crate::domain::{User, UserCreate, UserStatus, UserUpdate};
use crate::error::{DomainError, RepoError};
use crate::ports::{Clock, UserRepository, UuidGenerator};

use super::CertificationService;

const ENTITY: &str = "Users";

/// User lifecycle: registration, certification, login and profile edits.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    certification: CertificationService,
    clock: Arc<dyn Clock>,
    uuid: Arc<dyn UuidGenerator>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        certification: CertificationService,
        clock: Arc<dyn Clock>,
        uuid: Arc<dyn UuidGenerator>,
    ) -> Self {
        Self {
            users,
            certification,
            clock,
            uuid,
        }
    }

    /// Look up an active user by email. Pending accounts are not visible.
    pub async fn get_by_email(&self, email: &str) -> Result<User, DomainError> {
        self.users
            .find_by_email_and_status(email, UserStatus::Active)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, email))
    }

    /// Look up an active user by id. Pending accounts are not visible.
    pub async fn get_by_id(&self, id: i64) -> Result<User, DomainError> {
        self.users
            .find_by_id_and_status(id, UserStatus::Active)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    /// Register a pending user and mail them a certification link.
    pub async fn create(&self, create: UserCreate) -> Result<User, DomainError> {
        let user = User::from_create(create, self.uuid.as_ref());
        let user = self.users.save(user).await?;
        let id = user.id.ok_or_else(|| {
            RepoError::Query("saved user was not assigned an id".to_string())
        })?;

        tracing::info!(user_id = id, "User registered, awaiting certification");

        self.certification
            .send(&user.email, id, &user.certification_code)
            .await?;

        Ok(user)
    }

    pub async fn update(&self, id: i64, update: UserUpdate) -> Result<User, DomainError> {
        let user = self.find_any(id).await?.update(update);
        Ok(self.users.save(user).await?)
    }

    /// Stamp the last login time.
    pub async fn login(&self, id: i64) -> Result<(), DomainError> {
        let user = self.find_any(id).await?.login(self.clock.as_ref());
        self.users.save(user).await?;
        Ok(())
    }

    /// Activate the account when `certification_code` matches the stored code.
    pub async fn verify_email(&self, id: i64, certification_code: &str) -> Result<(), DomainError> {
        let user = self.find_any(id).await?;
        let was_active = user.is_active();
        let user = user.certificate(certification_code)?;
        self.users.save(user).await?;

        if !was_active {
            tracing::info!(user_id = id, "User certified");
        }
        Ok(())
    }

    async fn find_any(&self, id: i64) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::BaseRepository;
    use crate::services::fakes::{FakeMailSender, FakeUserRepository, FixedClock, FixedUuid};

    const NOW: i64 = 1678530673958;

    struct Fixture {
        service: UserService,
        users: Arc<FakeUserRepository>,
        mail: Arc<FakeMailSender>,
    }

    async fn fixture() -> Fixture {
        let users = Arc::new(FakeUserRepository::default());
        let mail = Arc::new(FakeMailSender::default());
        let service = UserService::new(
            users.clone(),
            CertificationService::new(mail.clone(), "http://localhost:8080"),
            Arc::new(FixedClock(NOW)),
            Arc::new(FixedUuid("aaaa-aaaa-aaaa-aaaa")),
        );

        users.save(seed_user(1, "member1@test.com", UserStatus::Active)).await.unwrap();
        users.save(seed_user(2, "member2@test.com", UserStatus::Pending)).await.unwrap();

        Fixture {
            service,
            users,
            mail,
        }
    }

    fn seed_user(id: i64, email: &str, status: UserStatus) -> User {
        User {
            id: Some(id),
            email: email.to_string(),
            nickname: format!("member{id}"),
            address: Some("Seoul".to_string()),
            certification_code: "aaaa-aaaa-aaaa-aaaa".to_string(),
            status,
            last_login_at: None,
        }
    }

    #[tokio::test]
    async fn test_get_by_email_returns_active_user() {
        let f = fixture().await;

        let user = f.service.get_by_email("member1@test.com").await.unwrap();

        assert_eq!(user.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn test_get_by_email_hides_pending_user() {
        let f = fixture().await;

        let result = f.service.get_by_email("member2@test.com").await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_by_id_hides_pending_user() {
        let f = fixture().await;

        assert!(f.service.get_by_id(1).await.is_ok());
        let err = f.service.get_by_id(2).await.unwrap_err();
        assert_eq!(err.to_string(), "Users에서 ID 2를 찾을 수 없습니다.");
    }

    #[tokio::test]
    async fn test_create_saves_pending_user_and_sends_mail() {
        let f = fixture().await;
        let create = UserCreate::new("member3@test.com", "member3", Some("Seoul".to_string()))
            .unwrap();

        let user = f.service.create(create).await.unwrap();

        assert_eq!(user.id, Some(3));
        assert_eq!(user.status, UserStatus::Pending);
        assert_eq!(user.certification_code, "aaaa-aaaa-aaaa-aaaa");
        let sent = f.mail.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "member3@test.com");
        assert!(sent[0].body.ends_with("/api/users/3/verify?certificationCode=aaaa-aaaa-aaaa-aaaa"));
    }

    #[tokio::test]
    async fn test_update_changes_profile() {
        let f = fixture().await;
        let update = UserUpdate {
            nickname: Some("member-update".to_string()),
            address: Some("Incheon".to_string()),
        };

        let user = f.service.update(1, update).await.unwrap();

        assert_eq!(user.nickname, "member-update");
        assert_eq!(user.address.as_deref(), Some("Incheon"));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let f = fixture().await;

        let result = f.service.update(99, UserUpdate::default()).await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_login_stamps_last_login_at() {
        let f = fixture().await;

        f.service.login(1).await.unwrap();

        let user = f.users.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(user.last_login_at.unwrap().timestamp_millis(), NOW);
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.nickname, "member1");
    }

    #[tokio::test]
    async fn test_verify_email_activates_pending_user() {
        let f = fixture().await;

        f.service.verify_email(2, "aaaa-aaaa-aaaa-aaaa").await.unwrap();

        let user = f.service.get_by_id(2).await.unwrap();
        assert_eq!(user.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn test_verify_email_with_wrong_code_keeps_pending() {
        let f = fixture().await;

        let result = f.service.verify_email(2, "aaaa-aaaa-aaaa-aaaa1").await;

        assert!(matches!(
            result,
            Err(DomainError::CertificationCodeNotMatched)
        ));
        let user = f.users.find_by_id(2).await.unwrap().unwrap();
        assert_eq!(user.status, UserStatus::Pending);
    }

    #[tokio::test]
    async fn test_verify_email_twice_is_harmless() {
        let f = fixture().await;

        f.service.verify_email(2, "aaaa-aaaa-aaaa-aaaa").await.unwrap();
        f.service.verify_email(2, "aaaa-aaaa-aaaa-aaaa").await.unwrap();

        let user = f.users.find_by_id(2).await.unwrap().unwrap();
        assert_eq!(user.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn test_verify_email_missing_user_is_not_found() {
        let f = fixture().await;

        let result = f.service.verify_email(99, "aaaa-aaaa-aaaa-aaaa").await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
