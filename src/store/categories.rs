//! Category storage

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Category, CategoryKind, DEFAULT_CATEGORIES};

const CATEGORY_COLUMNS: &str =
    "id, user_id, name, kind, icon, color, is_active, created_at, updated_at";

/// Fields for a new category row.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub user_id: Uuid,
    pub name: String,
    pub kind: CategoryKind,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// CRUD access to the categories table.
#[derive(Debug, Clone)]
pub struct CategoryStore {
    pool: PgPool,
}

impl CategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Case-insensitive duplicate check among the user's active categories.
    /// `exclude_id` skips the row being renamed so a category never
    /// collides with its own name.
    pub async fn active_name_taken(
        &self,
        user_id: Uuid,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM categories
                WHERE user_id = $1 AND LOWER(name) = LOWER($2) AND is_active
                  AND ($3::uuid IS NULL OR id <> $3)
            )
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn insert(&self, new: NewCategory) -> Result<Category, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO categories (id, user_id, name, kind, icon, color)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&sql)
            .bind(Uuid::new_v4())
            .bind(new.user_id)
            .bind(&new.name)
            .bind(new.kind)
            .bind(&new.icon)
            .bind(&new.color)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Option<Category>, sqlx::Error> {
        let sql = format!("SELECT {} FROM categories WHERE id = $1", CATEGORY_COLUMNS);

        sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list_active(&self, user_id: Uuid) -> Result<Vec<Category>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM categories WHERE user_id = $1 AND is_active ORDER BY kind, name",
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert every starter category the user does not already have
    /// (case-insensitive, deactivated names count as taken). Returns the
    /// number inserted; calling twice is a no-op the second time.
    pub async fn materialize_defaults(&self, user_id: Uuid) -> Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0u64;

        for preset in DEFAULT_CATEGORIES {
            let taken: bool = sqlx::query_scalar(
                r#"
                SELECT EXISTS (
                    SELECT 1 FROM categories
                    WHERE user_id = $1 AND LOWER(name) = LOWER($2)
                )
                "#,
            )
            .bind(user_id)
            .bind(preset.name)
            .fetch_one(&mut *tx)
            .await?;

            if taken {
                continue;
            }

            sqlx::query(
                r#"
                INSERT INTO categories (id, user_id, name, kind, icon, color)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(preset.name)
            .bind(preset.kind)
            .bind(preset.icon)
            .bind(preset.color)
            .execute(&mut *tx)
            .await?;

            inserted += 1;
        }

        tx.commit().await?;

        Ok(inserted)
    }

    /// Patch name/icon/color; absent fields keep their current value.
    pub async fn update_details(
        &self,
        id: Uuid,
        name: Option<&str>,
        icon: Option<&str>,
        color: Option<&str>,
    ) -> Result<Category, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE categories
            SET name = COALESCE($2, name),
                icon = COALESCE($3, icon),
                color = COALESCE($4, color),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .bind(name)
            .bind(icon)
            .bind(color)
            .fetch_one(&self.pool)
            .await
    }

    /// Soft delete: name, kind and owner survive so existing transactions
    /// keep their classification.
    pub async fn deactivate(&self, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE categories SET is_active = false, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
