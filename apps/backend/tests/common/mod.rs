#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use backend_test_support::problem_details::{
    assert_problem_details_from_service_response, ProblemDetailsLike,
};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert a Problem Details response with an exact code, status and detail.
pub async fn assert_problem_details_structure(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_detail: &str,
) -> ProblemDetailsLike {
    assert_problem_details_from_service_response(
        resp,
        expected_code,
        status(expected_status),
        Some(expected_detail),
    )
    .await
}

/// Same as above without pinning the detail text.
pub async fn assert_problem_code(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) -> ProblemDetailsLike {
    assert_problem_details_from_service_response(resp, expected_code, status(expected_status), None)
        .await
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).expect("valid HTTP status")
}
