//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase and timestamps are epoch milliseconds.

use serde::{Deserialize, Serialize};

use inkpost_core::DomainError;
use inkpost_core::domain::{
    Post, PostCreate, PostUpdate, User, UserCreate, UserStatus, UserUpdate,
};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreateRequest {
    pub email: String,
    pub nickname: String,
    pub address: Option<String>,
}

impl TryFrom<UserCreateRequest> for UserCreate {
    type Error = DomainError;

    fn try_from(req: UserCreateRequest) -> Result<Self, Self::Error> {
        UserCreate::new(req.email, req.nickname, req.address)
    }
}

/// Request to edit the caller's own profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    pub nickname: Option<String>,
    pub address: Option<String>,
}

impl TryFrom<UserUpdateRequest> for UserUpdate {
    type Error = DomainError;

    fn try_from(req: UserUpdateRequest) -> Result<Self, Self::Error> {
        UserUpdate::new(req.nickname, req.address)
    }
}

/// Request to write a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateRequest {
    pub writer_id: i64,
    pub content: String,
}

impl TryFrom<PostCreateRequest> for PostCreate {
    type Error = DomainError;

    fn try_from(req: PostCreateRequest) -> Result<Self, Self::Error> {
        PostCreate::new(req.writer_id, req.content)
    }
}

/// Request to replace a post's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostUpdateRequest {
    pub content: String,
}

impl TryFrom<PostUpdateRequest> for PostUpdate {
    type Error = DomainError;

    fn try_from(req: PostUpdateRequest) -> Result<Self, Self::Error> {
        PostUpdate::new(req.content)
    }
}

/// Public view of a user. Never exposes the address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Option<i64>,
    pub email: String,
    pub nickname: String,
    pub status: UserStatus,
    pub last_login_at: Option<i64>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            nickname: user.nickname,
            status: user.status,
            last_login_at: user.last_login_at.map(|t| t.timestamp_millis()),
        }
    }
}

/// The caller's own profile, including private fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyProfileResponse {
    pub id: Option<i64>,
    pub email: String,
    pub nickname: String,
    pub address: Option<String>,
    pub status: UserStatus,
    pub last_login_at: Option<i64>,
}

impl From<User> for MyProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            nickname: user.nickname,
            address: user.address,
            status: user.status,
            last_login_at: user.last_login_at.map(|t| t.timestamp_millis()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Option<i64>,
    pub content: String,
    pub created_at: i64,
    pub modified_at: Option<i64>,
    pub writer: UserResponse,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            content: post.content,
            created_at: post.created_at.timestamp_millis(),
            modified_at: post.modified_at.map(|t| t.timestamp_millis()),
            writer: post.writer.into(),
        }
    }
}
