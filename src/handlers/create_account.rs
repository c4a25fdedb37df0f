//! Account Creation Handler
//!
//! Opens an account after the duplicate-name and balance-floor checks.

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{validate_money, Account};
use crate::error::AppError;
use crate::ledger;
use crate::store::{AccountStore, NewAccount};

use super::CreateAccountCommand;

/// Handler for account creation
pub struct CreateAccountHandler {
    accounts: AccountStore,
    pool: PgPool,
}

impl CreateAccountHandler {
    pub fn new(pool: PgPool) -> Self {
        Self {
            accounts: AccountStore::new(pool.clone()),
            pool,
        }
    }

    /// Execute the account creation command
    pub async fn execute(
        &self,
        user_id: Uuid,
        command: CreateAccountCommand,
    ) -> Result<Account, AppError> {
        let name = command.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Account name is required".to_string()));
        }

        validate_money(command.balance)?;
        // The floor applies from the first write: a non-credit account
        // cannot open in the red.
        ledger::ensure_balance_allowed(command.account_type, command.balance)?;

        let mut tx = self.pool.begin().await?;

        if self.accounts.active_name_taken(&mut tx, user_id, &name).await? {
            return Err(AppError::DuplicateName(name));
        }

        let account = self
            .accounts
            .insert(
                &mut tx,
                NewAccount {
                    user_id,
                    name,
                    account_type: command.account_type,
                    currency: command.currency,
                    balance: command.balance,
                    bank_name: command.bank_name,
                    account_number: command.account_number,
                },
            )
            .await?;

        tx.commit().await?;

        tracing::debug!(
            "Account {} ({}) opened for user {}",
            account.id,
            account.account_type,
            user_id
        );

        Ok(account)
    }
}
