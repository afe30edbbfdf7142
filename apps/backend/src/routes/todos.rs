use actix_web::{web, HttpResponse};

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{CurrentUser, TodoId, ValidatedJson};
use crate::services::todos::{TodoRequest, TodoService};
use crate::state::app_state::AppState;

/// GET /todo
async fn list_todos(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let todos = TodoService::new().list(db, user.id).await?;
    Ok(HttpResponse::Ok().json(todos))
}

/// GET /todo/{todo_id}
async fn get_todo(
    user: CurrentUser,
    todo_id: TodoId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let todo = TodoService::new().get(db, user.id, todo_id.0).await?;
    Ok(HttpResponse::Ok().json(todo))
}

/// POST /todo
async fn create_todo(
    user: CurrentUser,
    body: ValidatedJson<TodoRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let owner_id = user.id;
    let req = body.into_inner();
    let todo = with_txn(&app_state, move |txn| {
        Box::pin(async move { TodoService::new().create(txn, owner_id, req).await })
    })
    .await?;
    Ok(HttpResponse::Created().json(todo))
}

/// PUT /todo/{todo_id}
async fn replace_todo(
    user: CurrentUser,
    todo_id: TodoId,
    body: ValidatedJson<TodoRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let owner_id = user.id;
    let req = body.into_inner();
    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            TodoService::new()
                .replace(txn, owner_id, todo_id.0, req)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /todo/{todo_id}
async fn delete_todo(
    user: CurrentUser,
    todo_id: TodoId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let owner_id = user.id;
    with_txn(&app_state, move |txn| {
        Box::pin(async move { TodoService::new().delete(txn, owner_id, todo_id.0).await })
    })
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_todos))
            .route(web::post().to(create_todo)),
    )
    .service(
        web::resource("/{todo_id}")
            .route(web::get().to(get_todo))
            .route(web::put().to(replace_todo))
            .route(web::delete().to(delete_todo)),
    );
}
