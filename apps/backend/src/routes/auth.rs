use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::gate::{issue_token, verify_credentials};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::logging::security;
use crate::services::users::{NewUser, UserService};
use crate::state::app_state::AppState;

/// OAuth2 password-flow form fields.
#[derive(Debug, Deserialize)]
pub struct TokenForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

#[derive(Debug, Serialize)]
struct CreatedResponse {
    message: &'static str,
    id: i32,
}

/// POST /auth
async fn register(
    body: ValidatedJson<NewUser>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let new_user = body.into_inner();
    let user = with_txn(&app_state, move |txn| {
        Box::pin(async move { UserService::new().register(txn, new_user).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(CreatedResponse {
        message: "User created",
        id: user.id,
    }))
}

/// POST /auth/token
async fn token(
    form: web::Form<TokenForm>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let db = require_db(&app_state)?;

    let Some(user) = verify_credentials(db, &form.username, &form.password).await? else {
        security::login_failed("bad_credentials", Some(&form.username));
        return Err(AppError::invalid_credentials());
    };

    let access_token = issue_token(
        &user.username,
        user.id,
        &user.role,
        app_state.security.access_token_ttl,
        &app_state.security,
    )?;
    info!(user_id = user.id, "access token issued");

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        AppError::invalid(ErrorCode::ValidationError, format!("Invalid form: {err}")).into()
    }))
    .route("", web::post().to(register))
    .route("/token", web::post().to(token));
}
