//! Uploaded image references.

use serde::{Deserialize, Serialize};

use shopkeeper_core::ImageId;

/// Reference to an uploaded image, as returned by the image store.
///
/// The record keeps the original filename alongside the served URL so the
/// panel can label thumbnails without parsing URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub id: ImageId,
    pub url: String,
    pub filename: String,
}

impl ImageRef {
    pub fn new(id: ImageId, url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            filename: filename.into(),
        }
    }
}
