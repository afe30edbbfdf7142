//! Task repository functions. Owner scoping happens here, not in handlers.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::todos_sea as todos_adapter;
use crate::adapters::todos_sea::TodoFields;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
    pub owner_id: i32,
}

fn todo_not_found() -> DomainError {
    DomainError::not_found(NotFoundKind::Todo, "Todo not found.")
}

pub async fn list_for_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
) -> Result<Vec<Todo>, DomainError> {
    let rows = todos_adapter::list_for_owner(conn, owner_id).await?;
    Ok(rows.into_iter().map(Todo::from).collect())
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Todo>, DomainError> {
    let rows = todos_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(Todo::from).collect())
}

pub async fn find_for_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i32,
    owner_id: i32,
) -> Result<Option<Todo>, DomainError> {
    let row = todos_adapter::find_for_owner(conn, todo_id, owner_id).await?;
    Ok(row.map(Todo::from))
}

/// Like `find_for_owner`, but absence is an error.
pub async fn require_for_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i32,
    owner_id: i32,
) -> Result<Todo, DomainError> {
    find_for_owner(conn, todo_id, owner_id)
        .await?
        .ok_or_else(todo_not_found)
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
    fields: TodoFields,
) -> Result<Todo, DomainError> {
    let row = todos_adapter::create(conn, owner_id, fields).await?;
    Ok(Todo::from(row))
}

pub async fn replace_for_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i32,
    owner_id: i32,
    fields: TodoFields,
) -> Result<Todo, DomainError> {
    todos_adapter::replace_for_owner(conn, todo_id, owner_id, fields)
        .await?
        .map(Todo::from)
        .ok_or_else(todo_not_found)
}

pub async fn delete_for_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i32,
    owner_id: i32,
) -> Result<(), DomainError> {
    match todos_adapter::delete_for_owner(conn, todo_id, owner_id).await? {
        0 => Err(todo_not_found()),
        _ => Ok(()),
    }
}

/// Unscoped delete for administrators.
pub async fn delete_any<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i32,
) -> Result<(), DomainError> {
    match todos_adapter::delete_any(conn, todo_id).await? {
        0 => Err(DomainError::not_found(NotFoundKind::Todo, "Todo Not Found")),
        _ => Ok(()),
    }
}

impl From<crate::entities::todos::Model> for Todo {
    fn from(model: crate::entities::todos::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            priority: model.priority,
            complete: model.complete,
            owner_id: model.owner_id,
        }
    }
}
