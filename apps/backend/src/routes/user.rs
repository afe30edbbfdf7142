use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::users::{PasswordChange, UserService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct PhoneNumberQuery {
    pub phone_number: String,
}

/// GET /user
async fn get_user(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let record = UserService::new().profile(db, user.id).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// PUT /user/password
async fn change_password(
    user: CurrentUser,
    body: ValidatedJson<PasswordChange>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = user.id;
    let change = body.into_inner();
    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            UserService::new()
                .change_password(txn, user_id, change)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /user/phone_number?phone_number=...
async fn change_phone_number(
    user: CurrentUser,
    query: web::Query<PhoneNumberQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = user.id;
    let phone_number = query.into_inner().phone_number;
    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            UserService::new()
                .update_phone_number(txn, user_id, phone_number)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::invalid(ErrorCode::ValidationError, format!("Invalid query: {err}")).into()
    }))
    .route("", web::get().to(get_user))
    .route("/password", web::put().to(change_password))
    .route("/phone_number", web::put().to(change_phone_number));
}
