//! Transaction entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::types::TransactionKind;

/// An immutable money movement record. Amount, kind and account references
/// are fixed at creation; only category, description and date may change
/// afterwards. Balance effects happen in the same database transaction that
/// writes or deletes the row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub account_id: Uuid,
    pub category_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
    /// Destination account, set on transfers only.
    pub to_account_id: Option<Uuid>,
    /// Source account mirror of `account_id`, set on transfers only.
    pub from_account_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
