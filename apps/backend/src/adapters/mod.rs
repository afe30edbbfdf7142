pub mod todos_sea;
pub mod users_sea;
