use actix_web::{web, HttpResponse};
use tracing::info;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{AdminUser, TodoId};
use crate::services::todos::TodoService;
use crate::state::app_state::AppState;

/// GET /admin/todo
async fn list_all_todos(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let todos = TodoService::new().list_all(db).await?;
    Ok(HttpResponse::Ok().json(todos))
}

/// DELETE /admin/todo/{todo_id}
async fn delete_any_todo(
    admin: AdminUser,
    todo_id: TodoId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(&app_state, move |txn| {
        Box::pin(async move { TodoService::new().delete_any(txn, todo_id.0).await })
    })
    .await?;
    info!(admin_id = admin.id, todo_id = todo_id.0, "todo deleted by admin");
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/todo", web::get().to(list_all_todos))
        .route("/todo/{todo_id}", web::delete().to(delete_any_todo));
}
