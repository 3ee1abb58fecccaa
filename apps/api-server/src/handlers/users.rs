//! User registration, certification and public profile handlers.

use actix_web::{HttpResponse, http::header, web};
use serde::Deserialize;

use inkpost_core::domain::UserCreate;
use inkpost_shared::dto::{UserCreateRequest, UserResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyQuery {
    pub certification_code: String,
}

/// POST /api/users
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<UserCreateRequest>,
) -> AppResult<HttpResponse> {
    let create = UserCreate::try_from(body.into_inner())?;
    let user = state.users.create(create).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let user = state.users.get_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// GET /api/users/{id}/verify?certificationCode=...
pub async fn verify_email(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<VerifyQuery>,
) -> AppResult<HttpResponse> {
    state
        .users
        .verify_email(path.into_inner(), &query.certification_code)
        .await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, state.frontend_url.as_str()))
        .finish())
}
