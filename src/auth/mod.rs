//! Authentication module
//!
//! Password hashing and opaque bearer-session management.

pub mod password;
pub mod sessions;

pub use password::{hash_password, verify_password};
pub use sessions::{issue_session, resolve_token, revoke_all_for_user, revoke_token};
