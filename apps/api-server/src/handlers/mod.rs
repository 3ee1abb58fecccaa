//! HTTP handlers and route configuration.

mod health;
mod my_info;
mod posts;
mod users;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Extractor failures answer with the same problem document as handlers
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/health_check.html", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                // `/me` must be registered before `/{id}`
                .service(
                    web::scope("/users")
                        .route("", web::post().to(users::create))
                        .route("/me", web::get().to(my_info::get_my_info))
                        .route("/me", web::put().to(my_info::update_my_info))
                        .route("/{id}", web::get().to(users::get_by_id))
                        .route("/{id}/verify", web::get().to(users::verify_email)),
                )
                .service(
                    web::scope("/posts")
                        .route("", web::post().to(posts::create))
                        .route("/{id}", web::get().to(posts::get_by_id))
                        .route("/{id}", web::put().to(posts::update)),
                ),
        );
}
