//! Category store seam.

use std::sync::RwLock;

use shopkeeper_catalog::Category;

use super::{StoreError, lock_poisoned};

/// Read access to the category catalog.
#[async_trait::async_trait]
pub trait CategoryStore: Send + Sync {
    /// Fetch the full catalog as one snapshot.
    ///
    /// Resolution wants a single consistent list; implementations must not
    /// serve a partially updated catalog.
    async fn fetch_all(&self) -> Result<Vec<Category>, StoreError>;
}

/// In-memory catalog for tests/dev.
///
/// Keeps insertion order, which is what makes first-match lookups
/// deterministic when a catalog carries duplicate ids.
#[derive(Debug)]
pub struct InMemoryCategoryStore {
    inner: RwLock<Vec<Category>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Append one category to the catalog.
    pub fn insert(&self, category: Category) {
        if let Ok(mut catalog) = self.inner.write() {
            catalog.push(category);
        }
    }

    /// Replace the whole catalog.
    pub fn set_all(&self, categories: Vec<Category>) {
        if let Ok(mut catalog) = self.inner.write() {
            *catalog = categories;
        }
    }
}

impl Default for InMemoryCategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn fetch_all(&self) -> Result<Vec<Category>, StoreError> {
        let catalog = self.inner.read().map_err(|_| lock_poisoned())?;
        Ok(catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_all_returns_categories_in_insertion_order() {
        let store = InMemoryCategoryStore::new();
        let clothing = Category::new("clothing");
        let shirts = Category::child_of("shirts", clothing.id);
        store.insert(clothing.clone());
        store.insert(shirts.clone());

        let catalog = store.fetch_all().await.unwrap();

        assert_eq!(catalog, vec![clothing, shirts]);
    }

    #[tokio::test]
    async fn set_all_replaces_the_snapshot() {
        let store = InMemoryCategoryStore::new();
        store.insert(Category::new("stale"));

        let fresh = vec![Category::new("fresh")];
        store.set_all(fresh.clone());

        assert_eq!(store.fetch_all().await.unwrap(), fresh);
    }
}
