//! Account Ledger
//!
//! The only code path that writes `accounts.balance`. Every operation runs
//! inside a caller-supplied database transaction, so a balance change and
//! the record write that motivated it commit or roll back as one unit.
//!
//! Both operations lock the account row with `SELECT ... FOR UPDATE` before
//! computing the new balance. Concurrent deltas against the same account
//! therefore serialize at the row and neither update is lost.

use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::domain::{Account, AccountType};
use crate::error::AppError;

const ACCOUNT_COLUMNS: &str = "id, user_id, name, account_type, currency, balance, \
     bank_name, account_number, is_active, created_at, updated_at";

/// Add a signed delta to an account's balance.
///
/// The row is locked, the candidate balance is checked against the account's
/// floor, and only then written. On `InvalidBalanceOperation` nothing has
/// been written and the caller's transaction is still clean to roll back.
pub async fn apply_delta(
    tx: &mut Transaction<'_, Postgres>,
    account_id: Uuid,
    delta: Decimal,
) -> Result<Account, AppError> {
    let account = lock_account(tx, account_id)
        .await?
        .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))?;

    let new_balance = account.balance + delta;
    ensure_balance_allowed(account.account_type, new_balance)?;

    write_balance(tx, account_id, new_balance).await
}

/// Overwrite an account's balance with an explicit value.
///
/// Used by the balance-correction endpoint only; the transaction engine
/// always goes through [`apply_delta`].
pub async fn set_balance(
    tx: &mut Transaction<'_, Postgres>,
    account_id: Uuid,
    new_balance: Decimal,
) -> Result<Account, AppError> {
    let account = lock_account(tx, account_id)
        .await?
        .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))?;

    ensure_balance_allowed(account.account_type, new_balance)?;

    write_balance(tx, account_id, new_balance).await
}

/// Non-credit accounts must never drop below zero.
pub fn ensure_balance_allowed(
    account_type: AccountType,
    candidate: Decimal,
) -> Result<(), AppError> {
    if candidate < Decimal::ZERO && !account_type.allows_negative_balance() {
        return Err(AppError::InvalidBalanceOperation(format!(
            "{} account balance would become negative ({})",
            account_type, candidate
        )));
    }
    Ok(())
}

async fn lock_account(
    tx: &mut Transaction<'_, Postgres>,
    account_id: Uuid,
) -> Result<Option<Account>, AppError> {
    let sql = format!(
        "SELECT {} FROM accounts WHERE id = $1 FOR UPDATE",
        ACCOUNT_COLUMNS
    );

    let account = sqlx::query_as::<_, Account>(&sql)
        .bind(account_id)
        .fetch_optional(&mut **tx)
        .await?;

    Ok(account)
}

async fn write_balance(
    tx: &mut Transaction<'_, Postgres>,
    account_id: Uuid,
    new_balance: Decimal,
) -> Result<Account, AppError> {
    let sql = format!(
        "UPDATE accounts SET balance = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
        ACCOUNT_COLUMNS
    );

    let account = sqlx::query_as::<_, Account>(&sql)
        .bind(account_id)
        .bind(new_balance)
        .fetch_one(&mut **tx)
        .await?;

    tracing::debug!(
        "Balance of account {} set to {}",
        account_id,
        new_balance
    );

    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_non_credit_floor_enforced() {
        for account_type in [AccountType::Checking, AccountType::Savings, AccountType::Cash] {
            assert!(ensure_balance_allowed(account_type, dec!(0)).is_ok());
            assert!(ensure_balance_allowed(account_type, dec!(100.50)).is_ok());

            let result = ensure_balance_allowed(account_type, dec!(-0.01));
            assert!(matches!(result, Err(AppError::InvalidBalanceOperation(_))));
        }
    }

    #[test]
    fn test_credit_may_go_negative() {
        assert!(ensure_balance_allowed(AccountType::Credit, dec!(-5000)).is_ok());
        assert!(ensure_balance_allowed(AccountType::Credit, dec!(250)).is_ok());
    }

    #[test]
    fn test_floor_error_names_account_type() {
        let err = ensure_balance_allowed(AccountType::Cash, dec!(-1)).unwrap_err();
        assert!(err.to_string().contains("cash"));
    }
}
