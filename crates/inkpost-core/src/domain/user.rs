use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ports::{Clock, UuidGenerator};

/// Account status. `Pending` until the emailed certification code is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Pending,
    Active,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Pending => "PENDING",
            UserStatus::Active => "ACTIVE",
        }
    }
}

/// Input for registering a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCreate {
    pub email: String,
    pub nickname: String,
    pub address: Option<String>,
}

impl UserCreate {
    pub fn new(
        email: impl Into<String>,
        nickname: impl Into<String>,
        address: Option<String>,
    ) -> Result<Self, DomainError> {
        let email = email.into();
        let nickname = nickname.into();

        if email.trim().is_empty() || !email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".to_string()));
        }
        if nickname.trim().is_empty() {
            return Err(DomainError::Validation("Nickname is required".to_string()));
        }

        Ok(Self {
            email,
            nickname,
            address,
        })
    }
}

/// Owner-initiated profile edit. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub nickname: Option<String>,
    pub address: Option<String>,
}

impl UserUpdate {
    pub fn new(nickname: Option<String>, address: Option<String>) -> Result<Self, DomainError> {
        if nickname.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(DomainError::Validation("Nickname is required".to_string()));
        }

        Ok(Self { nickname, address })
    }
}

/// User entity - represents a registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the repository on first save.
    pub id: Option<i64>,
    pub email: String,
    pub nickname: String,
    pub address: Option<String>,
    pub certification_code: String,
    pub status: UserStatus,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build a pending user with a fresh certification code.
    pub fn from_create(create: UserCreate, uuid: &dyn UuidGenerator) -> Self {
        Self {
            id: None,
            email: create.email,
            nickname: create.nickname,
            address: create.address,
            certification_code: uuid.random(),
            status: UserStatus::Pending,
            last_login_at: None,
        }
    }

    pub fn update(self, update: UserUpdate) -> Self {
        Self {
            nickname: update.nickname.unwrap_or(self.nickname),
            address: update.address.or(self.address),
            ..self
        }
    }

    pub fn login(self, clock: &dyn Clock) -> Self {
        Self {
            last_login_at: Some(clock.now()),
            ..self
        }
    }

    /// Activate the account if `code` equals the stored certification code.
    ///
    /// An already active user presenting the right code stays active.
    pub fn certificate(self, code: &str) -> Result<Self, DomainError> {
        if self.certification_code != code {
            return Err(DomainError::CertificationCodeNotMatched);
        }

        Ok(Self {
            status: UserStatus::Active,
            ..self
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct StubUuid(&'static str);

    impl UuidGenerator for StubUuid {
        fn random(&self) -> String {
            self.0.to_string()
        }
    }

    struct StubClock(i64);

    impl Clock for StubClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_millis_opt(self.0).unwrap()
        }
    }

    fn active_user() -> User {
        User {
            id: Some(1),
            email: "member1@test.com".to_string(),
            nickname: "member1".to_string(),
            address: Some("Seoul".to_string()),
            certification_code: "aaaa-aaaa-aaaa-aaaa".to_string(),
            status: UserStatus::Active,
            last_login_at: Some(Utc.timestamp_millis_opt(100).unwrap()),
        }
    }

    #[test]
    fn test_from_create_is_pending_with_code() {
        let create =
            UserCreate::new("member1@test.com", "member1", Some("Seoul".to_string())).unwrap();

        let user = User::from_create(create, &StubUuid("aaaa-aaaa-aaaa-aaaa"));

        assert_eq!(user.id, None);
        assert_eq!(user.email, "member1@test.com");
        assert_eq!(user.nickname, "member1");
        assert_eq!(user.address.as_deref(), Some("Seoul"));
        assert_eq!(user.status, UserStatus::Pending);
        assert_eq!(user.certification_code, "aaaa-aaaa-aaaa-aaaa");
        assert!(user.last_login_at.is_none());
    }

    #[test]
    fn test_user_create_rejects_bad_input() {
        assert!(matches!(
            UserCreate::new("not-an-email", "member1", None),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            UserCreate::new("member1@test.com", "  ", None),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_user_update_rejects_blank_nickname() {
        assert!(matches!(
            UserUpdate::new(Some("   ".to_string()), None),
            Err(DomainError::Validation(_))
        ));
        assert!(UserUpdate::new(None, Some("Pangyo".to_string())).is_ok());
    }

    #[test]
    fn test_update_overwrites_present_fields_only() {
        let user = active_user().update(UserUpdate {
            nickname: Some("member1-k".to_string()),
            address: None,
        });

        assert_eq!(user.id, Some(1));
        assert_eq!(user.email, "member1@test.com");
        assert_eq!(user.nickname, "member1-k");
        assert_eq!(user.address.as_deref(), Some("Seoul"));
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.certification_code, "aaaa-aaaa-aaaa-aaaa");
        assert_eq!(user.last_login_at.unwrap().timestamp_millis(), 100);
    }

    #[test]
    fn test_login_sets_last_login_only() {
        let before = active_user();
        let after = before.clone().login(&StubClock(1678530673958));

        assert_eq!(after.last_login_at.unwrap().timestamp_millis(), 1678530673958);
        assert_eq!(
            User {
                last_login_at: before.last_login_at,
                ..after
            },
            before
        );
    }

    #[test]
    fn test_certificate_with_matching_code_activates() {
        let pending = User {
            status: UserStatus::Pending,
            ..active_user()
        };

        let user = pending.certificate("aaaa-aaaa-aaaa-aaaa").unwrap();

        assert_eq!(user.status, UserStatus::Active);
    }

    #[test]
    fn test_certificate_with_wrong_code_fails() {
        let pending = User {
            status: UserStatus::Pending,
            ..active_user()
        };

        let result = pending.certificate("aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaab");

        assert!(matches!(
            result,
            Err(DomainError::CertificationCodeNotMatched)
        ));
    }

    #[test]
    fn test_certificate_again_keeps_active() {
        let user = active_user().certificate("aaaa-aaaa-aaaa-aaaa").unwrap();
        assert!(user.is_active());
    }
}
