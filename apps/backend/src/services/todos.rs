//! Task service: input validation plus owner-scoped CRUD.

use sea_orm::ConnectionTrait;
use serde::Deserialize;

use crate::adapters::todos_sea::TodoFields;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::todos::{self, Todo};

pub const MIN_TITLE_LEN: usize = 3;
pub const DESCRIPTION_LEN: std::ops::RangeInclusive<usize> = 3..=100;
pub const PRIORITY_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// Body accepted by create and replace.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoRequest {
    pub title: String,
    pub description: String,
    pub priority: i32,
    #[serde(default)]
    pub complete: bool,
}

impl TodoRequest {
    pub fn validate(self) -> Result<TodoFields, AppError> {
        let invalid = |detail: String| AppError::invalid(ErrorCode::ValidationError, detail);

        if self.title.chars().count() < MIN_TITLE_LEN {
            return Err(invalid(format!(
                "title must be at least {MIN_TITLE_LEN} characters"
            )));
        }
        if !DESCRIPTION_LEN.contains(&self.description.chars().count()) {
            return Err(invalid(format!(
                "description must be between {} and {} characters",
                DESCRIPTION_LEN.start(),
                DESCRIPTION_LEN.end()
            )));
        }
        if !PRIORITY_RANGE.contains(&self.priority) {
            return Err(invalid(format!(
                "priority must be between {} and {}",
                PRIORITY_RANGE.start(),
                PRIORITY_RANGE.end()
            )));
        }

        Ok(TodoFields {
            title: self.title,
            description: self.description,
            priority: self.priority,
            complete: self.complete,
        })
    }
}

pub struct TodoService;

impl TodoService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        owner_id: i32,
    ) -> Result<Vec<Todo>, AppError> {
        Ok(todos::list_for_owner(conn, owner_id).await?)
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        owner_id: i32,
        todo_id: i32,
    ) -> Result<Todo, AppError> {
        Ok(todos::require_for_owner(conn, todo_id, owner_id).await?)
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        owner_id: i32,
        req: TodoRequest,
    ) -> Result<Todo, AppError> {
        let fields = req.validate()?;
        Ok(todos::create(conn, owner_id, fields).await?)
    }

    pub async fn replace<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        owner_id: i32,
        todo_id: i32,
        req: TodoRequest,
    ) -> Result<Todo, AppError> {
        let fields = req.validate()?;
        Ok(todos::replace_for_owner(conn, todo_id, owner_id, fields).await?)
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        owner_id: i32,
        todo_id: i32,
    ) -> Result<(), AppError> {
        Ok(todos::delete_for_owner(conn, todo_id, owner_id).await?)
    }

    pub async fn list_all<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Todo>, AppError> {
        Ok(todos::list_all(conn).await?)
    }

    pub async fn delete_any<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        todo_id: i32,
    ) -> Result<(), AppError> {
        Ok(todos::delete_any(conn, todo_id).await?)
    }
}

impl Default for TodoService {
    fn default() -> Self {
        Self::new()
    }
}
