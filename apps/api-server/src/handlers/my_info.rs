//! The caller's own profile, identified by the `EMAIL` header.

use actix_web::{HttpResponse, web};

use inkpost_core::domain::UserUpdate;
use inkpost_shared::dto::{MyProfileResponse, UserUpdateRequest};

use crate::middleware::email::CallerEmail;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Reading "my info" counts as a login and refreshes `lastLoginAt`.
///
/// GET /api/users/me
pub async fn get_my_info(
    state: web::Data<AppState>,
    email: CallerEmail,
) -> AppResult<HttpResponse> {
    let user = state.users.get_by_email(&email.0).await?;
    let id = user
        .id
        .ok_or_else(|| AppError::Internal("active user without id".to_string()))?;

    state.users.login(id).await?;
    let user = state.users.get_by_email(&email.0).await?;

    Ok(HttpResponse::Ok().json(MyProfileResponse::from(user)))
}

/// PUT /api/users/me
pub async fn update_my_info(
    state: web::Data<AppState>,
    email: CallerEmail,
    body: web::Json<UserUpdateRequest>,
) -> AppResult<HttpResponse> {
    let update = UserUpdate::try_from(body.into_inner())?;
    let user = state.users.get_by_email(&email.0).await?;
    let id = user
        .id
        .ok_or_else(|| AppError::Internal("active user without id".to_string()))?;

    let user = state.users.update(id, update).await?;

    Ok(HttpResponse::Ok().json(MyProfileResponse::from(user)))
}
