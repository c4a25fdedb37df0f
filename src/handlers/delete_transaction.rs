//! Transaction Deletion Handler
//!
//! Undoes the balance effect of a recorded transaction and removes the row,
//! atomically. Reversal mirrors creation: expenses are credited back, income
//! is debited back, transfers are unwound on both legs.

use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use crate::domain::{ensure_owner, TransactionKind};
use crate::error::AppError;
use crate::ledger;
use crate::store::TransactionStore;

pub struct DeleteTransactionHandler {
    transactions: TransactionStore,
    pool: PgPool,
}

impl DeleteTransactionHandler {
    pub fn new(pool: PgPool) -> Self {
        Self {
            transactions: TransactionStore::new(pool.clone()),
            pool,
        }
    }

    /// Reverses the transaction's balance effect and deletes the row.
    ///
    /// Inactive accounts still take their reversal; an account row that no
    /// longer exists skips its leg. A reversal that would push a non-credit
    /// account below zero aborts the whole delete.
    pub async fn execute(&self, user_id: Uuid, transaction_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let record = self
            .transactions
            .fetch_for_update(&mut tx, transaction_id)
            .await?
            .ok_or_else(|| AppError::TransactionNotFound(transaction_id.to_string()))?;
        ensure_owner(&record, user_id)?;

        match record.kind {
            TransactionKind::Expense => {
                reverse_leg(&mut tx, record.account_id, record.amount).await?;
            }
            TransactionKind::Income => {
                reverse_leg(&mut tx, record.account_id, -record.amount).await?;
            }
            TransactionKind::Transfer => {
                reverse_leg(&mut tx, record.account_id, record.amount).await?;
                match record.to_account_id {
                    Some(destination_id) => {
                        reverse_leg(&mut tx, destination_id, -record.amount).await?;
                    }
                    None => {
                        tracing::warn!(
                            "Transfer {} carries no destination account, skipping second leg",
                            record.id
                        );
                    }
                }
            }
        }

        self.transactions.delete(&mut tx, transaction_id).await?;
        tx.commit().await?;

        tracing::debug!(
            "Deleted {} transaction {} and reversed its balance effect",
            record.kind,
            transaction_id
        );

        Ok(())
    }
}

/// Applies one reversal delta. A vanished account is logged and skipped so
/// the record can still be removed; every other failure propagates and rolls
/// the delete back.
async fn reverse_leg(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    account_id: Uuid,
    delta: Decimal,
) -> Result<(), AppError> {
    match ledger::apply_delta(tx, account_id, delta).await {
        Ok(_) => Ok(()),
        Err(AppError::AccountNotFound(_)) => {
            tracing::warn!(
                "Account {} no longer exists, skipping its reversal leg",
                account_id
            );
            Ok(())
        }
        Err(err) => Err(err),
    }
}
