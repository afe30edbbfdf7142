//! Seed data straight through the service layer.

use backend::adapters::todos_sea::TodoFields;
use backend::repos::todos::{self, Todo};
use backend::repos::users::User;
use backend::services::users::{NewUser, UserService};
use backend_test_support::unique_helpers::{unique_email, unique_username};
use sea_orm::ConnectionTrait;

pub const DEFAULT_PASSWORD: &str = "correct-horse";

pub fn new_user(prefix: &str, role: &str) -> NewUser {
    NewUser {
        username: unique_username(prefix),
        email: unique_email(prefix),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        password: DEFAULT_PASSWORD.to_string(),
        role: role.to_string(),
        phone_number: None,
    }
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    prefix: &str,
    role: &str,
) -> User {
    UserService::new()
        .register(conn, new_user(prefix, role))
        .await
        .expect("should register user")
}

pub async fn create_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
    title: &str,
) -> Todo {
    todos::create(
        conn,
        owner_id,
        TodoFields {
            title: title.to_string(),
            description: format!("{title} description"),
            priority: 3,
            complete: false,
        },
    )
    .await
    .expect("should create todo")
}
