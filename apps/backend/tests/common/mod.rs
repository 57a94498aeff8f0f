#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use backend_test_support::problem_details::{
    assert_problem_details_from_service_response, ProblemDetailsLike,
};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Problem Details contract check plus the header rules from `AppError`:
/// 401 carries `WWW-Authenticate`, 503 carries `Retry-After`, 4xx others
/// carry neither.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
) -> ProblemDetailsLike {
    let headers = resp.headers().clone();

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    match expected_status.as_u16() {
        401 => {
            assert_eq!(headers.get("WWW-Authenticate").unwrap(), "Bearer");
            assert!(headers.get("Retry-After").is_none());
        }
        503 => {
            assert!(headers.get("Retry-After").is_some());
            assert!(headers.get("WWW-Authenticate").is_none());
        }
        400 | 404 | 409 => {
            assert!(headers.get("WWW-Authenticate").is_none());
            assert!(headers.get("Retry-After").is_none());
        }
        _ => {}
    }

    let problem =
        assert_problem_details_from_service_response(resp, expected_code, expected_status, None)
            .await;
    assert!(
        problem.type_.starts_with("https://fantasy-ultimate.app/errors/"),
        "unexpected problem type {}",
        problem.type_
    );
    problem
}
