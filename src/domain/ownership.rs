//! Ownership guard
//!
//! Every entity reachable by id belongs to exactly one user. Callers check
//! existence first (absent row is `NotFound`), then ownership through this
//! guard (present but foreign row is `AccessDenied`). The order is the same
//! on every path.

use uuid::Uuid;

use crate::error::AppError;

/// Implemented by entities that belong to a single user.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

impl Owned for super::Account {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

impl Owned for super::Category {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

impl Owned for super::Transaction {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

/// Reject access to an entity the caller does not own.
pub fn ensure_owner<T: Owned>(entity: &T, user_id: Uuid) -> Result<(), AppError> {
    if entity.owner_id() != user_id {
        return Err(AppError::AccessDenied);
    }
    Ok(())
}
