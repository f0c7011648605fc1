//! Image store seam.

use std::sync::RwLock;

use shopkeeper_core::ImageId;
use shopkeeper_products::ImageRef;

use super::{StoreError, lock_poisoned};

/// One file handed to the image store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Blob storage for product images.
#[async_trait::async_trait]
pub trait ImageStore: Send + Sync {
    /// Store the given files, returning one ref per file in input order.
    async fn upload(&self, files: Vec<UploadFile>) -> Result<Vec<ImageRef>, StoreError>;
}

/// In-memory image store for tests/dev.
///
/// Served URLs take the shape `{base_url}/{image_id}/{filename}`.
#[derive(Debug)]
pub struct InMemoryImageStore {
    base_url: String,
    accepted: RwLock<Vec<ImageRef>>,
}

impl InMemoryImageStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            accepted: RwLock::new(Vec::new()),
        }
    }

    /// Every ref this store has handed out, in acceptance order.
    pub fn accepted(&self) -> Vec<ImageRef> {
        match self.accepted.read() {
            Ok(accepted) => accepted.clone(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for InMemoryImageStore {
    fn default() -> Self {
        Self::new("mem://images")
    }
}

#[async_trait::async_trait]
impl ImageStore for InMemoryImageStore {
    async fn upload(&self, files: Vec<UploadFile>) -> Result<Vec<ImageRef>, StoreError> {
        let mut refs = Vec::with_capacity(files.len());
        for file in files {
            let id = ImageId::new();
            let url = format!(
                "{}/{}/{}",
                self.base_url.trim_end_matches('/'),
                id,
                file.filename
            );
            refs.push(ImageRef::new(id, url, file.filename));
        }

        let mut accepted = self.accepted.write().map_err(|_| lock_poisoned())?;
        accepted.extend(refs.iter().cloned());
        tracing::debug!(count = refs.len(), "accepted image upload");
        Ok(refs)
    }
}
