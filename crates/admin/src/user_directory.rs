//! User administration session.

use shopkeeper_core::{UserId, replace_by_id};
use shopkeeper_infra::{StoreError, UserStore};
use shopkeeper_users::User;

use crate::notify::Notifier;

/// The users screen: a loaded account list plus the admin toggle flow.
///
/// Confirmation is the caller's job; by the time [`UserDirectory::set_admin`]
/// runs, the operator has already said yes.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts as last loaded or patched.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Replace the list with a fresh snapshot from the store.
    pub async fn load(&mut self, store: &dyn UserStore) -> Result<(), StoreError> {
        self.users = store.list().await?;
        Ok(())
    }

    /// Ask the store to set an account's admin flag, then patch the local
    /// list with the confirmed record.
    ///
    /// The outcome lands at the notifier: "Users updated" on success, the
    /// store's failure message otherwise. On failure the local list stays
    /// untouched and no retry is attempted.
    pub async fn set_admin(
        &mut self,
        store: &dyn UserStore,
        notifier: &dyn Notifier,
        user_id: UserId,
        admin: bool,
    ) {
        match store.set_admin(user_id, admin).await {
            Ok(updated) => {
                replace_by_id(&mut self.users, updated);
                notifier.success("Users updated");
            }
            Err(err) => {
                tracing::warn!(user_id = %user_id, error = %err, "admin flag update failed");
                notifier.failure(&err.to_string());
            }
        }
    }
}
