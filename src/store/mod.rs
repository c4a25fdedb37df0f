//! Storage gateway
//!
//! Per-entity wrappers over sqlx queries. All SQL lives here; callers see
//! typed rows and `Option` for absent ids. Methods that must compose with
//! other writes atomically take the caller's transaction instead of the
//! pool.

mod accounts;
mod categories;
mod transactions;
mod users;

pub use accounts::{AccountStore, NewAccount};
pub use categories::{CategoryStore, NewCategory};
pub use transactions::{NewTransaction, TransactionFilter, TransactionStore};
pub use users::UserStore;
