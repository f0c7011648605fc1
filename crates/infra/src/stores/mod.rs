//! Store traits and their in-memory implementations.

use thiserror::Error;

mod categories;
mod images;
mod products;
mod users;

pub use categories::{CategoryStore, InMemoryCategoryStore};
pub use images::{ImageStore, InMemoryImageStore, UploadFile};
pub use products::{InMemoryProductStore, ProductStore};
pub use users::{InMemoryUserStore, UserStore};

/// Failure raised by a store backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,

    /// The backend could not be reached or could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Shared mapping for poisoned in-memory locks.
pub(crate) fn lock_poisoned() -> StoreError {
    StoreError::unavailable("store lock poisoned")
}
