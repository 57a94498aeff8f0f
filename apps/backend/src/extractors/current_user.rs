use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::auth::claims::BackendClaims;
use crate::error::AppError;

/// The authenticated caller.
///
/// Built from the claims `JwtExtract` left in request extensions; no database
/// lookup is needed because `user_id` is the token subject.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
    pub email: String,
}

impl From<BackendClaims> for CurrentUser {
    fn from(claims: BackendClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<BackendClaims>().cloned();
        ready(
            claims
                .map(CurrentUser::from)
                .ok_or_else(AppError::unauthorized_missing_bearer),
        )
    }
}
