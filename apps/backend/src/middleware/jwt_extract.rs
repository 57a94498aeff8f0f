//! Bearer-token gate for the `/api` scope.
//!
//! Verifies the `Authorization: Bearer <jwt>` header and stores the
//! resulting `BackendClaims` in request extensions for `CurrentUser`.
//! Rejections are rendered here as Problem Details rather than propagated
//! as `Err`, so the body carries the request's trace id.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::extractors::jwt::bearer_token;
use crate::state::app_state::AppState;

pub struct JwtExtract;

impl<S, B> Transform<S, ServiceRequest> for JwtExtract
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtExtractMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtExtractMiddleware { service }))
    }
}

pub struct JwtExtractMiddleware<S> {
    service: S,
}

fn authenticate(req: &ServiceRequest) -> Result<(), AppError> {
    let token = bearer_token(req.headers().get(AUTHORIZATION))?
        .ok_or_else(AppError::unauthorized_missing_bearer)?;

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    let claims = verify_access_token(&token, &state.security)?;
    req.extensions_mut().insert(claims);
    Ok(())
}

impl<S, B> Service<ServiceRequest> for JwtExtractMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authenticate(&req) {
            Ok(()) => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => {
                debug!(code = %err.code(), path = %req.path(), "request rejected by JwtExtract");
                // Rendered inside the future so trace_ctx is in scope
                Box::pin(async move {
                    let response = err.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                })
            }
        }
    }
}
