//! Account storage
//!
//! Reads and non-balance writes. Balance columns are written only by the
//! ledger module.

use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use crate::domain::{Account, AccountType, Currency};

const ACCOUNT_COLUMNS: &str = "id, user_id, name, account_type, currency, balance, \
     bank_name, account_number, is_active, created_at, updated_at";

/// Fields for a new account row.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub user_id: Uuid,
    pub name: String,
    pub account_type: AccountType,
    pub currency: Currency,
    pub balance: Decimal,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
}

/// CRUD access to the accounts table.
#[derive(Debug, Clone)]
pub struct AccountStore {
    pool: PgPool,
}

impl AccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Exact-name duplicate check among the user's active accounts, inside
    /// the caller's transaction.
    pub async fn active_name_taken(
        &self,
        tx: &mut sqlx::Transaction<'_, Postgres>,
        user_id: Uuid,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM accounts
                WHERE user_id = $1 AND name = $2 AND is_active
            )
            "#,
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(&mut **tx)
        .await
    }

    pub async fn insert(
        &self,
        tx: &mut sqlx::Transaction<'_, Postgres>,
        new: NewAccount,
    ) -> Result<Account, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO accounts
                (id, user_id, name, account_type, currency, balance, bank_name, account_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            ACCOUNT_COLUMNS
        );

        sqlx::query_as::<_, Account>(&sql)
            .bind(Uuid::new_v4())
            .bind(new.user_id)
            .bind(&new.name)
            .bind(new.account_type)
            .bind(new.currency)
            .bind(new.balance)
            .bind(&new.bank_name)
            .bind(&new.account_number)
            .fetch_one(&mut **tx)
            .await
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Option<Account>, sqlx::Error> {
        let sql = format!("SELECT {} FROM accounts WHERE id = $1", ACCOUNT_COLUMNS);

        sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Fetch with a row lock, for composing checks with balance writes.
    pub async fn fetch_for_update(
        &self,
        tx: &mut sqlx::Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<Option<Account>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM accounts WHERE id = $1 FOR UPDATE",
            ACCOUNT_COLUMNS
        );

        sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    pub async fn list_active(&self, user_id: Uuid) -> Result<Vec<Account>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM accounts WHERE user_id = $1 AND is_active ORDER BY created_at",
            ACCOUNT_COLUMNS
        );

        sqlx::query_as::<_, Account>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Patch name/bank details; absent fields keep their current value.
    /// Type, currency and balance are immutable here.
    pub async fn update_details(
        &self,
        id: Uuid,
        name: Option<&str>,
        bank_name: Option<&str>,
        account_number: Option<&str>,
    ) -> Result<Account, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE accounts
            SET name = COALESCE($2, name),
                bank_name = COALESCE($3, bank_name),
                account_number = COALESCE($4, account_number),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            ACCOUNT_COLUMNS
        );

        sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .bind(name)
            .bind(bank_name)
            .bind(account_number)
            .fetch_one(&self.pool)
            .await
    }

    /// Soft delete: transactions referencing the account stay valid.
    pub async fn deactivate(&self, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE accounts SET is_active = false, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
