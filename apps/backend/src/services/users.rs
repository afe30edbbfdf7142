//! User account service: registration and self-service updates.

use sea_orm::ConnectionTrait;
use serde::Deserialize;
use tracing::info;

use crate::adapters::users_sea::UserCreate;
use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::repos::users::{self, User};

pub const MIN_NEW_PASSWORD_LEN: usize = 6;

/// Registration payload. The password arrives in plaintext and is hashed here.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordChange {
    pub password: String,
    pub new_password: String,
}

pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// Create a user. A taken email is rejected before the insert; the unique
    /// index still backs that check when two registrations race.
    pub async fn register<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        new_user: NewUser,
    ) -> Result<User, AppError> {
        if new_user.username.trim().is_empty() {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "username must not be empty",
            ));
        }
        if new_user.password.is_empty() {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "password must not be empty",
            ));
        }

        if users::find_user_by_email(conn, &new_user.email).await?.is_some() {
            return Err(AppError::bad_request(
                ErrorCode::EmailAlreadyRegistered,
                "Email already registered",
            ));
        }

        let hashed = hash_password(&new_user.password)?;
        let dto = UserCreate::new(&new_user.username, &new_user.email, hashed)
            .with_names(new_user.first_name, new_user.last_name)
            .with_role(new_user.role)
            .with_phone_number(new_user.phone_number);

        let user = users::create_user(conn, dto).await?;
        info!(user_id = user.id, email = %Redacted(&user.email), "user registered");
        Ok(user)
    }

    pub async fn profile<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i32,
    ) -> Result<User, AppError> {
        users::find_user_by_id(conn, user_id)
            .await?
            .ok_or_else(AppError::user_not_found)
    }

    /// Replace the password after verifying the current one.
    pub async fn change_password<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i32,
        change: PasswordChange,
    ) -> Result<(), AppError> {
        if change.new_password.chars().count() < MIN_NEW_PASSWORD_LEN {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                format!("new_password must be at least {MIN_NEW_PASSWORD_LEN} characters"),
            ));
        }

        let user = self.profile(conn, user_id).await?;
        if !verify_password(&change.password, &user.hashed_password) {
            return Err(AppError::invalid_password());
        }

        let hashed = hash_password(&change.new_password)?;
        users::update_password_hash(conn, user_id, hashed).await?;
        info!(user_id, "password changed");
        Ok(())
    }

    pub async fn update_phone_number<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i32,
        phone_number: String,
    ) -> Result<(), AppError> {
        users::update_phone_number(conn, user_id, Some(phone_number)).await?;
        Ok(())
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}
