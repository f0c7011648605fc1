//! Product store seam.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use shopkeeper_core::ProductId;
use shopkeeper_products::{Product, ProductDraft};

use super::{StoreError, lock_poisoned};

/// Persistence for product records.
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    /// Store a new product, assigning its id and timestamps.
    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Overwrite the editable fields of an existing product.
    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, StoreError>;
}

/// In-memory product store for tests/dev.
#[derive(Debug)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch one record, if stored.
    pub fn get(&self, id: ProductId) -> Option<Product> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let product = Product::from_draft(ProductId::new(), draft, Utc::now());
        let mut map = self.inner.write().map_err(|_| lock_poisoned())?;
        map.insert(product.id, product.clone());
        tracing::debug!(product_id = %product.id, "created product");
        Ok(product)
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut map = self.inner.write().map_err(|_| lock_poisoned())?;
        let Some(existing) = map.get_mut(&id) else {
            return Err(StoreError::NotFound);
        };
        existing.apply_draft(draft, Utc::now());
        let updated = existing.clone();
        drop(map);
        tracing::debug!(product_id = %id, "updated product");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_draft(title: &str) -> ProductDraft {
        ProductDraft {
            title: title.to_string(),
            description: "desc".to_string(),
            price: 500,
            ..ProductDraft::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_stamps_both_timestamps() {
        let store = InMemoryProductStore::new();

        let product = store.create(test_draft("Mug")).await.unwrap();

        assert_eq!(product.title, "Mug");
        assert_eq!(product.created_at, product.updated_at);
        assert_eq!(store.get(product.id), Some(product));
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_creation_time() {
        let store = InMemoryProductStore::new();
        let created = store.create(test_draft("Mug")).await.unwrap();

        let updated = store
            .update(created.id, test_draft("Mug, large"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Mug, large");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(store.get(created.id), Some(updated));
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let store = InMemoryProductStore::new();

        let err = store
            .update(ProductId::new(), test_draft("Ghost"))
            .await
            .unwrap_err();

        assert_eq!(err, StoreError::NotFound);
    }
}
