//! Session management
//!
//! Bearer tokens are opaque: 32 random bytes, hex-encoded. Only the SHA-256
//! digest of a token ever touches the database, so a leaked sessions table
//! cannot be replayed.

use chrono::{Duration, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;

/// Sessions live for 30 days; re-login issues a fresh token.
pub const SESSION_TTL_HOURS: i64 = 24 * 30;

/// Hex SHA-256 digest of a raw token, the only form stored or queried.
pub fn token_digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Issue a new session for a user and return the raw bearer token.
/// Expired sessions of the same user are swept on the way.
pub async fn issue_session(pool: &PgPool, user_id: Uuid) -> Result<String, AppError> {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    let token = hex::encode(bytes);

    let expires_at = Utc::now() + Duration::hours(SESSION_TTL_HOURS);

    sqlx::query("DELETE FROM sessions WHERE user_id = $1 AND expires_at <= NOW()")
        .bind(user_id)
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        INSERT INTO sessions (id, user_id, token_hash, expires_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(token_digest(&token))
    .bind(expires_at)
    .execute(pool)
    .await?;

    Ok(token)
}

/// Resolve a presented token to the owning user's id.
/// Returns `None` for unknown or expired tokens and for deactivated users.
pub async fn resolve_token(pool: &PgPool, token: &str) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT s.user_id
        FROM sessions s
        JOIN users u ON u.id = s.user_id
        WHERE s.token_hash = $1 AND s.expires_at > NOW() AND u.is_active
        "#,
    )
    .bind(token_digest(token))
    .fetch_optional(pool)
    .await
}

/// Revoke the session behind a presented token.
pub async fn revoke_token(pool: &PgPool, token: &str) -> Result<(), AppError> {
    sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
        .bind(token_digest(token))
        .execute(pool)
        .await?;

    Ok(())
}

/// Revoke every session a user holds (profile deactivation).
pub async fn revoke_all_for_user(pool: &PgPool, user_id: Uuid) -> Result<(), AppError> {
    sqlx::query("DELETE FROM sessions WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}
