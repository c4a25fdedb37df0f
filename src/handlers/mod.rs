//! Command Handlers module
//!
//! Write-path handlers that orchestrate validation, balance movement, and
//! row persistence. Each handler wraps its work in one database transaction.

mod commands;
mod create_account;
mod create_transaction;
mod delete_transaction;
mod login;
mod register_user;

#[cfg(test)]
mod tests;

pub use commands::*;
pub use create_account::CreateAccountHandler;
pub use create_transaction::CreateTransactionHandler;
pub use delete_transaction::DeleteTransactionHandler;
pub use login::LoginHandler;
pub use register_user::RegisterUserHandler;
