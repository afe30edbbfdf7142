use std::env;

use crate::error::AppError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./todosapp.db?mode=rwc";
pub const DEFAULT_TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Which database the process talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// `DATABASE_URL`
    Prod,
    /// `TEST_DATABASE_URL`; must be in-memory or name a test database
    Test,
}

/// Resolve the connection URL for a profile from the environment.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => Ok(var_or("DATABASE_URL", DEFAULT_DATABASE_URL)),
        DbProfile::Test => {
            let url = var_or("TEST_DATABASE_URL", DEFAULT_TEST_DATABASE_URL);
            if !is_memory_url(&url) && !url.contains("test") {
                return Err(AppError::config(format!(
                    "Test profile requires an in-memory database or a name containing 'test', got: '{url}'"
                )));
            }
            Ok(url)
        }
    }
}

/// True for SQLite URLs that never touch disk.
pub fn is_memory_url(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}

fn var_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}
