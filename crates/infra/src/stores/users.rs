//! User store seam.

use std::sync::RwLock;

use chrono::Utc;

use shopkeeper_core::UserId;
use shopkeeper_users::User;

use super::{StoreError, lock_poisoned};

/// Persistence for panel user accounts.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Every account, in the store's listing order.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Set the admin flag on one account, returning the updated record.
    async fn set_admin(&self, id: UserId, admin: bool) -> Result<User, StoreError>;
}

/// In-memory user store for tests/dev. Lists in insertion order.
#[derive(Debug)]
pub struct InMemoryUserStore {
    inner: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    pub fn insert(&self, user: User) {
        if let Ok(mut users) = self.inner.write() {
            users.push(user);
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = self.inner.read().map_err(|_| lock_poisoned())?;
        Ok(users.clone())
    }

    async fn set_admin(&self, id: UserId, admin: bool) -> Result<User, StoreError> {
        let mut users = self.inner.write().map_err(|_| lock_poisoned())?;
        let Some(slot) = users.iter_mut().find(|u| u.id == id) else {
            return Err(StoreError::NotFound);
        };
        let updated = slot.clone().with_admin(admin, Utc::now());
        *slot = updated.clone();
        drop(users);
        tracing::debug!(user_id = %id, admin, "updated admin flag");
        Ok(updated)
    }
}
