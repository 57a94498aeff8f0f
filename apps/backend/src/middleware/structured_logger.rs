use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::RequestId;
use crate::auth::claims::BackendClaims;
use crate::logging::pii::redact_sub;

/// One `request_completed` event per request, levelled by status class.
///
/// Logs the matched route pattern rather than the raw path so player names
/// in URLs stay out of the aggregate, plus the caller when `JwtExtract`
/// authenticated one.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

struct Completed {
    method: String,
    route: String,
    status: StatusCode,
    duration_us: u64,
    request_id: String,
    user_id: Option<String>,
}

impl Completed {
    fn emit(&self) {
        let user = self.user_id.as_deref().map(redact_sub);
        let code = self.status.as_u16();
        if self.status.is_server_error() {
            error!(http.method = %self.method, http.route = %self.route, http.status_code = code, duration_us = self.duration_us, request_id = %self.request_id, user_id = ?user, "request_completed");
        } else if self.status.is_client_error() {
            warn!(http.method = %self.method, http.route = %self.route, http.status_code = code, duration_us = self.duration_us, request_id = %self.request_id, user_id = ?user, "request_completed");
        } else {
            info!(http.method = %self.method, http.route = %self.route, http.status_code = code, duration_us = self.duration_us, request_id = %self.request_id, user_id = ?user, "request_completed");
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let raw_path = req.path().to_string();
        let request_id = req
            .extensions()
            .get::<RequestId>()
            .map_or_else(|| "unknown".to_string(), |id| id.0.clone());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, route, user_id) = match &result {
                Ok(res) => {
                    let request = res.request();
                    let user_id = request
                        .extensions()
                        .get::<BackendClaims>()
                        .map(|claims| claims.sub.clone());
                    // Unmatched requests have no pattern; fall back to the path
                    let route = request.match_pattern().unwrap_or(raw_path);
                    (res.status(), route, user_id)
                }
                Err(err) => (err.as_response_error().status_code(), raw_path, None),
            };

            Completed {
                method,
                route,
                status,
                duration_us: start.elapsed().as_micros() as u64,
                request_id,
                user_id,
            }
            .emit();

            result
        })
    }
}
