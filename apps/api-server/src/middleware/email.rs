//! Caller identification by the `EMAIL` request header.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

use super::error::AppError;

/// Header carrying the caller's email address.
pub static EMAIL_HEADER: &str = "EMAIL";

/// The caller's email, taken from the `EMAIL` header.
///
/// There is no authentication layer; the header is trusted as-is.
#[derive(Debug, Clone)]
pub struct CallerEmail(pub String);

impl FromRequest for CallerEmail {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let email = req
            .headers()
            .get(EMAIL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        match email {
            Some(email) => ready(Ok(CallerEmail(email.to_string()))),
            None => ready(Err(AppError::BadRequest(
                "Missing EMAIL header".to_string(),
            ))),
        }
    }
}
