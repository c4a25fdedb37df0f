//! User Registration Handler
//!
//! Creates a user with a hashed password after checking email uniqueness.

use sqlx::PgPool;

use crate::auth;
use crate::domain::User;
use crate::error::AppError;
use crate::store::UserStore;

use super::RegisterUserCommand;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 8;

/// Handler for user registration
pub struct RegisterUserHandler {
    users: UserStore,
    pool: PgPool,
}

impl RegisterUserHandler {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserStore::new(pool.clone()),
            pool,
        }
    }

    /// Execute the registration command
    pub async fn execute(&self, command: RegisterUserCommand) -> Result<User, AppError> {
        let email = command.email.trim().to_lowercase();

        if !email.contains('@') {
            return Err(AppError::Validation("Invalid email address".to_string()));
        }
        if command.password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        if command.first_name.trim().is_empty() || command.last_name.trim().is_empty() {
            return Err(AppError::Validation(
                "First and last name are required".to_string(),
            ));
        }

        // Hash before opening the transaction; argon2 is deliberately slow.
        let password_hash = auth::hash_password(&command.password)?;

        let mut tx = self.pool.begin().await?;

        if self.users.email_taken(&mut tx, &email).await? {
            return Err(AppError::EmailTaken);
        }

        let user = self
            .users
            .insert(
                &mut tx,
                &email,
                command.first_name.trim(),
                command.last_name.trim(),
                &password_hash,
            )
            .await?;

        tx.commit().await?;

        tracing::info!("User {} registered", user.id);

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_command_deserialize() {
        let json = r#"{
            "email": "alice@example.com",
            "password": "hunter2hunter2",
            "first_name": "Alice",
            "last_name": "Smith"
        }"#;

        let cmd: RegisterUserCommand = serde_json::from_str(json).unwrap();
        assert_eq!(cmd.email, "alice@example.com");
        assert_eq!(cmd.first_name, "Alice");
    }
}
