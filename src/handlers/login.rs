//! Login Handler
//!
//! Verifies credentials and opens a bearer session.

use sqlx::PgPool;

use crate::auth;
use crate::error::AppError;
use crate::store::UserStore;

use super::{LoginCommand, LoginOutcome};

/// Handler for credential verification and session issuance
pub struct LoginHandler {
    users: UserStore,
    pool: PgPool,
}

impl LoginHandler {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserStore::new(pool.clone()),
            pool,
        }
    }

    /// Execute the login command.
    ///
    /// Unknown emails, wrong passwords and deactivated users all answer
    /// with the same `InvalidCredentials` error.
    pub async fn execute(&self, command: LoginCommand) -> Result<LoginOutcome, AppError> {
        let email = command.email.trim().to_lowercase();

        let user = self
            .users
            .fetch_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !auth::verify_password(&command.password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(AppError::InvalidCredentials);
        }

        // The returned snapshot carries the stamp of this login.
        let user = self.users.touch_last_login(user.id).await?;
        let token = auth::issue_session(&self.pool, user.id).await?;

        tracing::info!("User {} logged in", user.id);

        Ok(LoginOutcome { token, user })
    }
}
