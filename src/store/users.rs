//! User storage

use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use crate::domain::User;

const USER_COLUMNS: &str = "id, email, first_name, last_name, password_hash, \
     is_active, last_login, created_at, updated_at";

/// CRUD access to the users table.
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check whether an email is already registered, inside the caller's
    /// transaction so the following insert sees the same snapshot.
    pub async fn email_taken(
        &self,
        tx: &mut sqlx::Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&mut **tx)
            .await
    }

    pub async fn insert(
        &self,
        tx: &mut sqlx::Transaction<'_, Postgres>,
        email: &str,
        first_name: &str,
        last_name: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO users (id, email, first_name, last_name, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(Uuid::new_v4())
            .bind(email)
            .bind(first_name)
            .bind(last_name)
            .bind(password_hash)
            .fetch_one(&mut **tx)
            .await
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);

        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn fetch_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);

        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    /// Patch first/last name; absent fields keep their current value.
    pub async fn update_names(
        &self,
        id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<User, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE users
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(first_name)
            .bind(last_name)
            .fetch_one(&self.pool)
            .await
    }

    /// Stamps `last_login` and returns the refreshed row.
    pub async fn touch_last_login(&self, id: Uuid) -> Result<User, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE users
            SET last_login = NOW(), updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    /// Soft delete: the row and its history stay, the flag flips.
    pub async fn deactivate(&self, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET is_active = false, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
