//! Command definitions
//!
//! Commands represent intentions to change the system state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{AccountType, Currency, TransactionKind, User};

/// Command to register a new user
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Command to authenticate a user and open a session
#[derive(Debug, Clone, Deserialize)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// A fresh session: the raw bearer token and its owner
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    pub token: String,
    pub user: User,
}

/// Command to open an account
#[derive(Debug, Clone)]
pub struct CreateAccountCommand {
    pub name: String,
    pub account_type: AccountType,
    pub currency: Currency,
    /// Starting balance, zero when omitted by the client.
    pub balance: Decimal,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
}

/// Command to record a money movement
#[derive(Debug, Clone)]
pub struct CreateTransactionCommand {
    pub account_id: Uuid,
    pub category_id: Option<Uuid>,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
    /// Destination account, required for transfers.
    pub to_account_id: Option<Uuid>,
}
