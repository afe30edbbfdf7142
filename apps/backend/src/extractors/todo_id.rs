use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Positive task id taken from the `{todo_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub i32);

impl TodoId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let id = raw.parse::<i32>().map_err(|_| {
            AppError::bad_request(ErrorCode::InvalidTodoId, format!("Invalid todo id: {raw}"))
        })?;

        if id <= 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidTodoId,
                format!("Todo id must be positive, got: {id}"),
            ));
        }

        Ok(TodoId(id))
    }
}

impl FromRequest for TodoId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("todo_id") {
            Some(raw) => TodoId::parse(raw),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidTodoId,
                "Missing todo_id parameter",
            )),
        };
        ready(result)
    }
}
