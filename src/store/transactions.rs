//! Transaction storage
//!
//! Row reads and writes only; balance effects live in the ledger module and
//! share the caller's database transaction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::{Transaction, TransactionKind};

const TRANSACTION_COLUMNS: &str = "id, user_id, account_id, category_id, kind, amount, \
     description, transaction_date, to_account_id, from_account_id, created_at, updated_at";

/// Fields for a new transaction row.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: Uuid,
    pub account_id: Uuid,
    pub category_id: Option<Uuid>,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
    pub to_account_id: Option<Uuid>,
    pub from_account_id: Option<Uuid>,
}

/// Optional listing filters; all present filters are ANDed together.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Matches the source account or, for transfers, the destination.
    pub account_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub kind: Option<TransactionKind>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

/// CRUD access to the transactions table.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    pool: PgPool,
}

impl TransactionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        tx: &mut sqlx::Transaction<'_, Postgres>,
        new: NewTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO transactions
                (id, user_id, account_id, category_id, kind, amount, description,
                 transaction_date, to_account_id, from_account_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            TRANSACTION_COLUMNS
        );

        sqlx::query_as::<_, Transaction>(&sql)
            .bind(Uuid::new_v4())
            .bind(new.user_id)
            .bind(new.account_id)
            .bind(new.category_id)
            .bind(new.kind)
            .bind(new.amount)
            .bind(&new.description)
            .bind(new.transaction_date)
            .bind(new.to_account_id)
            .bind(new.from_account_id)
            .fetch_one(&mut **tx)
            .await
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Option<Transaction>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM transactions WHERE id = $1",
            TRANSACTION_COLUMNS
        );

        sqlx::query_as::<_, Transaction>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Fetch with a row lock so the delete path reverses exactly the row it
    /// read.
    pub async fn fetch_for_update(
        &self,
        tx: &mut sqlx::Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM transactions WHERE id = $1 FOR UPDATE",
            TRANSACTION_COLUMNS
        );

        sqlx::query_as::<_, Transaction>(&sql)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    pub async fn list(
        &self,
        user_id: Uuid,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {} FROM transactions WHERE user_id = ",
            TRANSACTION_COLUMNS
        ));
        builder.push_bind(user_id);

        if let Some(account_id) = filter.account_id {
            builder.push(" AND (account_id = ");
            builder.push_bind(account_id);
            builder.push(" OR to_account_id = ");
            builder.push_bind(account_id);
            builder.push(")");
        }
        if let Some(category_id) = filter.category_id {
            builder.push(" AND category_id = ");
            builder.push_bind(category_id);
        }
        if let Some(kind) = filter.kind {
            builder.push(" AND kind = ");
            builder.push_bind(kind);
        }
        if let Some(date_from) = filter.date_from {
            builder.push(" AND transaction_date >= ");
            builder.push_bind(date_from);
        }
        if let Some(date_to) = filter.date_to {
            builder.push(" AND transaction_date <= ");
            builder.push_bind(date_to);
        }

        builder.push(" ORDER BY transaction_date DESC");

        builder
            .build_query_as::<Transaction>()
            .fetch_all(&self.pool)
            .await
    }

    /// Patch category/description/date; absent fields keep their current
    /// value. Amount, kind and account references are immutable.
    pub async fn update_details(
        &self,
        id: Uuid,
        category_id: Option<Uuid>,
        description: Option<&str>,
        transaction_date: Option<DateTime<Utc>>,
    ) -> Result<Transaction, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE transactions
            SET category_id = COALESCE($2, category_id),
                description = COALESCE($3, description),
                transaction_date = COALESCE($4, transaction_date),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            TRANSACTION_COLUMNS
        );

        sqlx::query_as::<_, Transaction>(&sql)
            .bind(id)
            .bind(category_id)
            .bind(description)
            .bind(transaction_date)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn delete(
        &self,
        tx: &mut sqlx::Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Sum of amounts for one kind in an inclusive date window. Transfers
    /// are never summed by the aggregator; it only asks for income and
    /// expense.
    pub async fn sum_by_kind(
        &self,
        user_id: Uuid,
        kind: TransactionKind,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Decimal, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM transactions
            WHERE user_id = $1
              AND kind = $2
              AND transaction_date >= $3
              AND transaction_date <= $4
            "#,
        )
        .bind(user_id)
        .bind(kind)
        .bind(from)
        .bind(to)
        .fetch_one(&self.pool)
        .await
    }
}
