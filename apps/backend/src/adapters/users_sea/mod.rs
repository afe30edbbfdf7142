//! SeaORM adapter for the users table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::users;

pub mod dto;

pub use dto::UserCreate;

// Adapter functions return DbErr; repos map to DomainError.

/// First match by exact (case-sensitive) username, lowest id first.
pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .order_by_asc(users::Column::Id)
        .one(conn)
        .await
}

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i32,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let user_active = users::ActiveModel {
        id: NotSet,
        email: Set(dto.email),
        username: Set(dto.username),
        first_name: Set(dto.first_name),
        last_name: Set(dto.last_name),
        hashed_password: Set(dto.hashed_password),
        is_active: Set(true),
        role: Set(dto.role),
        phone_number: Set(dto.phone_number),
    };

    user_active.insert(conn).await
}

/// Returns the number of rows touched (0 when the user is gone).
pub async fn update_password_hash<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i32,
    hashed_password: String,
) -> Result<u64, sea_orm::DbErr> {
    let res = users::Entity::update_many()
        .col_expr(
            users::Column::HashedPassword,
            sea_orm::sea_query::Expr::value(hashed_password),
        )
        .filter(users::Column::Id.eq(user_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn update_phone_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i32,
    phone_number: Option<String>,
) -> Result<u64, sea_orm::DbErr> {
    let res = users::Entity::update_many()
        .col_expr(
            users::Column::PhoneNumber,
            sea_orm::sea_query::Expr::value(phone_number),
        )
        .filter(users::Column::Id.eq(user_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
