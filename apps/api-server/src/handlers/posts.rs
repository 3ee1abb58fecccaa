//! Post handlers.

use actix_web::{HttpResponse, web};

use inkpost_core::domain::{PostCreate, PostUpdate};
use inkpost_shared::dto::{PostCreateRequest, PostResponse, PostUpdateRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostCreateRequest>,
) -> AppResult<HttpResponse> {
    let create = PostCreate::try_from(body.into_inner())?;
    let post = state.posts.create(create).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// GET /api/posts/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostUpdateRequest>,
) -> AppResult<HttpResponse> {
    let update = PostUpdate::try_from(body.into_inner())?;
    let post = state.posts.update(path.into_inner(), update).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}
