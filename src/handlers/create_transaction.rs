//! Transaction Creation Handler
//!
//! Records a money movement and applies its balance effect in one database
//! transaction. A failure at any step rolls the whole unit back: no
//! transaction row without its balance effect, no balance effect without
//! its row.

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{ensure_owner, Amount, Transaction, TransactionKind};
use crate::error::AppError;
use crate::handlers::CreateTransactionCommand;
use crate::ledger;
use crate::store::{AccountStore, CategoryStore, NewTransaction, TransactionStore};

pub struct CreateTransactionHandler {
    accounts: AccountStore,
    categories: CategoryStore,
    transactions: TransactionStore,
    pool: PgPool,
}

impl CreateTransactionHandler {
    pub fn new(pool: PgPool) -> Self {
        Self {
            accounts: AccountStore::new(pool.clone()),
            categories: CategoryStore::new(pool.clone()),
            transactions: TransactionStore::new(pool.clone()),
            pool,
        }
    }

    /// Validates the command, moves money, and persists the record.
    ///
    /// Expenses subtract from the source account, income adds to it, and
    /// transfers move the amount from the source to the destination (source
    /// leg first). Every referenced entity must exist, and be active, before
    /// it must be owned, so error codes reveal nothing about foreign ids.
    pub async fn execute(
        &self,
        user_id: Uuid,
        command: CreateTransactionCommand,
    ) -> Result<Transaction, AppError> {
        let amount = Amount::new(command.amount)?;

        // Categories carry no balance state, so the check stays outside the
        // row-locking transaction.
        if let Some(category_id) = command.category_id {
            let category = self
                .categories
                .fetch(category_id)
                .await?
                .filter(|category| category.is_active)
                .ok_or_else(|| AppError::CategoryNotFound(category_id.to_string()))?;
            ensure_owner(&category, user_id)?;
        }

        let mut tx = self.pool.begin().await?;

        // Closed accounts read as missing, the same answer the account
        // endpoints give.
        let source = self
            .accounts
            .fetch_for_update(&mut tx, command.account_id)
            .await?
            .filter(|account| account.is_active)
            .ok_or_else(|| AppError::AccountNotFound(command.account_id.to_string()))?;
        ensure_owner(&source, user_id)?;

        let (to_account_id, from_account_id) = match command.kind {
            TransactionKind::Expense => {
                ledger::apply_delta(&mut tx, source.id, -amount.value()).await?;
                (None, None)
            }
            TransactionKind::Income => {
                ledger::apply_delta(&mut tx, source.id, amount.value()).await?;
                (None, None)
            }
            TransactionKind::Transfer => {
                let destination_id = command.to_account_id.ok_or_else(|| {
                    AppError::Validation(
                        "Destination account is required for transfers".to_string(),
                    )
                })?;
                if destination_id == source.id {
                    return Err(AppError::Validation(
                        "Cannot transfer to the same account".to_string(),
                    ));
                }

                let destination = self
                    .accounts
                    .fetch_for_update(&mut tx, destination_id)
                    .await?
                    .filter(|account| account.is_active)
                    .ok_or_else(|| AppError::AccountNotFound(destination_id.to_string()))?;
                ensure_owner(&destination, user_id)?;

                // Source leg first. If the withdrawal breaks the balance
                // floor the destination row is never touched.
                ledger::apply_delta(&mut tx, source.id, -amount.value()).await?;
                ledger::apply_delta(&mut tx, destination.id, amount.value()).await?;

                (Some(destination.id), Some(source.id))
            }
        };

        let transaction = self
            .transactions
            .insert(
                &mut tx,
                NewTransaction {
                    user_id,
                    account_id: source.id,
                    category_id: command.category_id,
                    kind: command.kind,
                    amount: amount.value(),
                    description: command.description,
                    transaction_date: command.transaction_date,
                    to_account_id,
                    from_account_id,
                },
            )
            .await?;

        tx.commit().await?;

        tracing::debug!(
            "Recorded {} transaction {} on account {} for {}",
            transaction.kind,
            transaction.id,
            source.id,
            amount
        );

        Ok(transaction)
    }
}
