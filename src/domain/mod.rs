//! Domain module
//!
//! Core domain types and invariants.

pub mod account;
pub mod amount;
pub mod category;
pub mod ownership;
pub mod transaction;
pub mod types;
pub mod user;

pub use account::Account;
pub use amount::{validate_money, Amount, AmountError};
pub use category::{Category, CategoryPreset, DEFAULT_CATEGORIES};
pub use ownership::{ensure_owner, Owned};
pub use transaction::Transaction;
pub use types::{AccountType, CategoryKind, Currency, TransactionKind};
pub use user::User;
