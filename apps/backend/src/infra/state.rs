use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for AppState, shared by main and tests.
pub struct StateBuilder {
    security_config: Option<SecurityConfig>,
    db_profile: Option<DbProfile>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: None,
            db_profile: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = Some(security_config);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let security = self
            .security_config
            .ok_or_else(|| AppError::config("StateBuilder requires a SecurityConfig"))?;

        match self.db_profile {
            Some(profile) => {
                let conn = bootstrap_db(profile).await?;
                Ok(AppState::new(conn, security))
            }
            None => Ok(AppState::without_db(security)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builds_without_db() {
        let state = build_state()
            .with_security(SecurityConfig::new("unit-secret"))
            .build()
            .await
            .unwrap();
        assert!(state.db.is_none());
    }

    #[tokio::test]
    async fn security_is_mandatory() {
        assert!(build_state().build().await.is_err());
    }
}
