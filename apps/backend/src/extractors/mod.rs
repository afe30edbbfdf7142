pub mod admin_user;
pub mod auth_token;
pub mod current_user;
pub mod todo_id;
pub mod validated_json;

pub use admin_user::AdminUser;
pub use auth_token::AuthToken;
pub use current_user::CurrentUser;
pub use todo_id::TodoId;
pub use validated_json::ValidatedJson;
