mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::auth::claims::Claims;
use backend::decode_and_authorize;
use backend_test_support::unique_helpers::{unique_email, unique_username};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::{json, Value};
use support::factory::{create_user, DEFAULT_PASSWORD};
use support::test_state::TEST_SECRET;
use support::{build_test_state, create_test_app, test_security};

use crate::common::{assert_problem_code, assert_problem_details_structure};

fn registration(username: &str, email: &str) -> Value {
    json!({
        "username": username,
        "email": email,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "password": "analytical",
        "role": "user",
        "phone_number": "555-0100"
    })
}

#[actix_web::test]
async fn register_creates_user() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let username = unique_username("ada");
    let req = test::TestRequest::post()
        .uri("/auth")
        .set_json(registration(&username, &unique_email("ada")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User created");
    assert!(body["id"].as_i64().unwrap_or_default() > 0);

    // The new account can log in straight away.
    let req = test::TestRequest::post()
        .uri("/auth/token")
        .set_form([("username", username.as_str()), ("password", "analytical")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[actix_web::test]
async fn register_rejects_taken_email() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let email = unique_email("dup");
    let first = test::TestRequest::post()
        .uri("/auth")
        .set_json(registration(&unique_username("one"), &email))
        .to_request();
    assert_eq!(
        test::call_service(&app, first).await.status(),
        StatusCode::CREATED
    );

    let second = test::TestRequest::post()
        .uri("/auth")
        .set_json(registration(&unique_username("two"), &email))
        .to_request();
    let resp = test::call_service(&app, second).await;
    assert_problem_details_structure(resp, 400, "EMAIL_ALREADY_REGISTERED", "Email already registered")
        .await;
    Ok(())
}

#[actix_web::test]
async fn register_requires_all_fields() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/auth")
        .set_json(json!({ "username": "half", "password": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem_code(resp, 400, "VALIDATION_ERROR").await;
    assert!(problem.detail.starts_with("Missing field"));
    Ok(())
}

#[actix_web::test]
async fn register_rejects_blank_username_or_password() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let mut blank_username = registration("   ", &unique_email("blank"));
    blank_username["password"] = json!("analytical");
    let mut empty_password = registration(&unique_username("nopw"), &unique_email("nopw"));
    empty_password["password"] = json!("");

    for body in [blank_username, empty_password] {
        let req = test::TestRequest::post().uri("/auth").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_code(resp, 400, "VALIDATION_ERROR").await;
    }
    Ok(())
}

#[actix_web::test]
async fn token_for_valid_credentials_decodes_to_caller() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let user = create_user(state.db.as_ref().unwrap(), "login", "admin").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/auth/token")
        .set_form([
            ("username", user.username.as_str()),
            ("password", DEFAULT_PASSWORD),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");
    let token = body["access_token"].as_str().unwrap();

    let identity = decode_and_authorize(token, &test_security())?;
    assert_eq!(identity.username, user.username);
    assert_eq!(identity.id, user.id);
    assert_eq!(identity.role, "admin");
    Ok(())
}

#[actix_web::test]
async fn issued_token_lives_twenty_minutes() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let user = create_user(state.db.as_ref().unwrap(), "window", "user").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/auth/token")
        .set_form([
            ("username", user.username.as_str()),
            ("password", DEFAULT_PASSWORD),
        ])
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let token = body["access_token"].as_str().unwrap();

    let claims = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?
    .claims;

    assert_eq!(claims.exp - claims.iat, 20 * 60);
    let now = time::OffsetDateTime::now_utc().unix_timestamp();
    assert!((now - claims.iat).abs() <= 5, "iat {} vs now {now}", claims.iat);
    assert_eq!(claims.username, user.username);
    assert_eq!(claims.id, user.id);
    Ok(())
}

#[actix_web::test]
async fn wrong_password_and_unknown_user_look_the_same() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let user = create_user(state.db.as_ref().unwrap(), "login", "user").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let wrong_password = test::TestRequest::post()
        .uri("/auth/token")
        .set_form([("username", user.username.as_str()), ("password", "nope")])
        .to_request();
    let resp = test::call_service(&app, wrong_password).await;
    let a = assert_problem_details_structure(
        resp,
        401,
        "INVALID_CREDENTIALS",
        "Username or password is incorrect.",
    )
    .await;

    let unknown_user = test::TestRequest::post()
        .uri("/auth/token")
        .set_form([("username", "ghost"), ("password", DEFAULT_PASSWORD)])
        .to_request();
    let resp = test::call_service(&app, unknown_user).await;
    let b = assert_problem_details_structure(
        resp,
        401,
        "INVALID_CREDENTIALS",
        "Username or password is incorrect.",
    )
    .await;

    assert_eq!(a.title, b.title);
    assert_ne!(a.trace_id, b.trace_id);
    Ok(())
}

#[actix_web::test]
async fn token_form_missing_password_is_validation_error() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/auth/token")
        .set_form([("username", "someone")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_code(resp, 400, "VALIDATION_ERROR").await;
    Ok(())
}
