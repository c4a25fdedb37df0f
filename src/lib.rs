//! finance_ledger Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod auth;
pub mod domain;
pub mod handlers;
pub mod ledger;
pub mod stats;
pub mod store;

// Private modules (used only by main.rs binary)
pub mod config;
pub mod db;
mod error;

pub use config::Config;
pub use domain::{Amount, AmountError};
pub use error::{AppError, AppResult};
