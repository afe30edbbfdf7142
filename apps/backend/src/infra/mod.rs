//! Infrastructure layer: database bootstrap, state assembly, DbErr translation.

pub mod db;
pub mod db_errors;
pub mod state;
