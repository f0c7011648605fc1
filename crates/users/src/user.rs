//! Panel user accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopkeeper_core::{Entity, UserId};

/// A user account as listed in the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Whether the account may use the admin surfaces.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            admin: false,
            created_at: at,
            updated_at: at,
        }
    }

    /// Copy of this account with the admin flag set, bumping `updated_at`.
    pub fn with_admin(mut self, admin: bool, at: DateTime<Utc>) -> Self {
        self.admin = admin;
        self.updated_at = at;
        self
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accounts_start_without_admin_access() {
        let user = User::new("Dana", "dana@example.com", Utc::now());

        assert!(!user.admin);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn with_admin_bumps_only_the_update_timestamp() {
        let created = Utc::now();
        let user = User::new("Dana", "dana@example.com", created);
        let later = created + chrono::Duration::seconds(30);

        let promoted = user.clone().with_admin(true, later);

        assert!(promoted.admin);
        assert_eq!(promoted.id, user.id);
        assert_eq!(promoted.created_at, created);
        assert_eq!(promoted.updated_at, later);
    }
}
