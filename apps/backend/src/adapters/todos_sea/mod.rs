//! SeaORM adapter for the todos table.
//!
//! Owner-scoped functions filter on both `id` and `owner_id`, so a task that
//! belongs to someone else looks exactly like a missing one.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::todos;

pub mod dto;

pub use dto::TodoFields;

pub async fn list_for_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
) -> Result<Vec<todos::Model>, sea_orm::DbErr> {
    todos::Entity::find()
        .filter(todos::Column::OwnerId.eq(owner_id))
        .order_by_asc(todos::Column::Id)
        .all(conn)
        .await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<todos::Model>, sea_orm::DbErr> {
    todos::Entity::find()
        .order_by_asc(todos::Column::Id)
        .all(conn)
        .await
}

pub async fn find_for_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i32,
    owner_id: i32,
) -> Result<Option<todos::Model>, sea_orm::DbErr> {
    todos::Entity::find_by_id(todo_id)
        .filter(todos::Column::OwnerId.eq(owner_id))
        .one(conn)
        .await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
    fields: TodoFields,
) -> Result<todos::Model, sea_orm::DbErr> {
    let active = todos::ActiveModel {
        id: NotSet,
        title: Set(fields.title),
        description: Set(fields.description),
        priority: Set(fields.priority),
        complete: Set(fields.complete),
        owner_id: Set(owner_id),
    };

    active.insert(conn).await
}

/// Replace all mutable fields of an owned task. `None` when not owned or absent.
pub async fn replace_for_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i32,
    owner_id: i32,
    fields: TodoFields,
) -> Result<Option<todos::Model>, sea_orm::DbErr> {
    let Some(existing) = find_for_owner(conn, todo_id, owner_id).await? else {
        return Ok(None);
    };

    let mut active: todos::ActiveModel = existing.into();
    active.title = Set(fields.title);
    active.description = Set(fields.description);
    active.priority = Set(fields.priority);
    active.complete = Set(fields.complete);

    active.update(conn).await.map(Some)
}

/// Number of rows removed: 0 or 1.
pub async fn delete_for_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i32,
    owner_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let res = todos::Entity::delete_many()
        .filter(todos::Column::Id.eq(todo_id))
        .filter(todos::Column::OwnerId.eq(owner_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn delete_any<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    todo_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let res = todos::Entity::delete_by_id(todo_id).exec(conn).await?;
    Ok(res.rows_affected)
}
