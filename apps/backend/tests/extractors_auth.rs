mod common;
mod support;

use actix_web::http::header::AUTHORIZATION;
use actix_web::{test, web, HttpResponse};
use backend::extractors::{AdminUser, CurrentUser};
use backend::state::security_config::SecurityConfig;
use serde_json::{json, Value};
use support::auth::{bearer_header, mint_expired_token};
use support::{build_test_state, create_test_app, test_security};

use crate::common::assert_problem_details_structure;

async fn whoami(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "id": user.id,
        "username": user.username,
        "role": user.role,
    }))
}

async fn admin_only(_admin: AdminUser) -> HttpResponse {
    HttpResponse::Ok().finish()
}

fn probe_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/whoami", web::get().to(whoami))
        .route("/admin-only", web::get().to(admin_only));
}

async fn call_whoami(auth: Option<String>) -> actix_web::dev::ServiceResponse {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_routes(probe_routes).build().await;

    let mut req = test::TestRequest::get().uri("/whoami");
    if let Some(value) = auth {
        req = req.insert_header((AUTHORIZATION, value));
    }
    test::call_service(&app, req.to_request()).await
}

#[actix_web::test]
async fn valid_token_exposes_identity() {
    let auth = bearer_header("alice", 7, "admin", &test_security());
    let resp = call_whoami(Some(auth)).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "id": 7, "username": "alice", "role": "admin" }));
}

#[actix_web::test]
async fn lowercase_scheme_is_accepted() {
    let token = support::auth::mint_test_token("alice", 7, "user", &test_security());
    let resp = call_whoami(Some(format!("bearer {token}"))).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn missing_header_is_not_authenticated() {
    let resp = call_whoami(None).await;
    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_MISSING_BEARER", "Not authenticated")
        .await;
}

#[actix_web::test]
async fn non_bearer_schemes_are_not_authenticated() {
    for value in ["Basic dXNlcjpwYXNz", "Bearer", "Bearer a b", "token"] {
        let resp = call_whoami(Some(value.to_string())).await;
        assert_problem_details_structure(
            resp,
            401,
            "UNAUTHORIZED_MISSING_BEARER",
            "Not authenticated",
        )
        .await;
    }
}

#[actix_web::test]
async fn expired_token_cannot_be_validated() {
    let token = mint_expired_token("alice", 7, "user", &test_security());
    let resp = call_whoami(Some(format!("Bearer {token}"))).await;
    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_INVALID_TOKEN", "Could not validate user.")
        .await;
}

#[actix_web::test]
async fn foreign_secret_cannot_be_validated() {
    let other = SecurityConfig::new("some-other-secret-entirely".as_bytes());
    let resp = call_whoami(Some(bearer_header("alice", 7, "user", &other))).await;
    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_INVALID_TOKEN", "Could not validate user.")
        .await;
}

#[actix_web::test]
async fn garbage_token_cannot_be_validated() {
    let resp = call_whoami(Some("Bearer not.a.jwt".to_string())).await;
    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_INVALID_TOKEN", "Could not validate user.")
        .await;
}

fn signed(claims: Value) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(support::test_state::TEST_SECRET.as_bytes()),
    )
    .expect("encode")
}

#[actix_web::test]
async fn incomplete_claims_share_the_bad_signature_detail() {
    let exp = time::OffsetDateTime::now_utc().unix_timestamp() + 600;
    let incomplete = [
        json!({ "id": 7, "role": "user", "exp": exp }),
        json!({ "username": "alice", "role": "user", "exp": exp }),
        json!({ "username": "alice", "id": null, "role": "user", "exp": exp }),
    ];

    for claims in incomplete {
        let resp = call_whoami(Some(format!("Bearer {}", signed(claims)))).await;
        assert_problem_details_structure(
            resp,
            401,
            "UNAUTHORIZED_INVALID_TOKEN",
            "Could not validate user.",
        )
        .await;
    }
}

#[actix_web::test]
async fn admin_extractor_checks_role_after_token() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_routes(probe_routes).build().await;

    let req = test::TestRequest::get()
        .uri("/admin-only")
        .insert_header((AUTHORIZATION, bearer_header("bob", 3, "user", &test_security())))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 401, "INSUFFICIENT_ROLE", "Authentication Failed").await;

    let req = test::TestRequest::get().uri("/admin-only").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_MISSING_BEARER", "Not authenticated")
        .await;

    let req = test::TestRequest::get()
        .uri("/admin-only")
        .insert_header((AUTHORIZATION, bearer_header("root", 1, "admin", &test_security())))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
