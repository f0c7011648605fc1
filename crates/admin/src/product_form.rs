//! Product editing session.

use thiserror::Error;

use shopkeeper_catalog::{Category, PropertyDefinition, ResolveError, resolve_properties};
use shopkeeper_core::{CategoryId, DomainError, ImageId, ProductId};
use shopkeeper_infra::{CategoryStore, ImageStore, ProductStore, StoreError, UploadFile};
use shopkeeper_products::{ImageRef, Product, ProductDraft};

/// Failure surfaced by [`ProductForm::save`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The product editor: field state, a catalog snapshot, and upload tracking.
///
/// The form is event-driven. Setters record operator edits, store calls are
/// awaited one at a time, and nothing here spawns or blocks. Uploads are the
/// one overlappable operation: each started batch is tracked until its
/// outcome is recorded, and accepted refs land in completion order.
#[derive(Debug, Default)]
pub struct ProductForm {
    product_id: Option<ProductId>,
    draft: ProductDraft,
    categories: Vec<Category>,
    uploads_in_flight: u32,
}

impl ProductForm {
    /// Blank form; saving will create a product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form seeded from an existing record; saving will update it.
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_id: Some(product.id),
            draft: product.to_draft(),
            categories: Vec::new(),
            uploads_in_flight: 0,
        }
    }

    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    /// Current editable fields.
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Price in the smallest currency unit.
    pub fn set_price(&mut self, price: u64) {
        self.draft.price = price;
    }

    /// Select a category, or clear the selection.
    ///
    /// Values bound under the previous category stay in the draft; they
    /// simply stop being offered by [`Self::properties_to_fill`].
    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.draft.category = category;
    }

    /// Bind one property value, leaving every other binding untouched.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.draft.properties.set(name, value);
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Replace the catalog snapshot used for property resolution.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    /// Fetch a fresh catalog snapshot from the store.
    pub async fn load_categories(&mut self, store: &dyn CategoryStore) -> Result<(), StoreError> {
        self.categories = store.fetch_all().await?;
        Ok(())
    }

    /// Properties to offer for the selected category, resolved against the
    /// held snapshot on every call.
    pub fn properties_to_fill(&self) -> Result<Vec<PropertyDefinition>, ResolveError> {
        resolve_properties(&self.categories, self.draft.category)
    }

    /// Mark one upload batch as started.
    pub fn begin_upload(&mut self) {
        self.uploads_in_flight += 1;
    }

    /// Record the outcome of one started batch.
    ///
    /// Accepted refs are appended behind whatever the form already shows, so
    /// overlapping batches land in completion order. A failed batch
    /// contributes nothing; its error is handed back for surfacing either
    /// way, the in-flight mark is cleared.
    pub fn finish_upload(
        &mut self,
        outcome: Result<Vec<ImageRef>, StoreError>,
    ) -> Result<(), StoreError> {
        self.uploads_in_flight = self.uploads_in_flight.saturating_sub(1);
        match outcome {
            Ok(refs) => {
                self.draft.images.extend(refs);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "image upload failed");
                Err(err)
            }
        }
    }

    /// Upload `files` and append the accepted refs to the form.
    ///
    /// Convenience pairing of [`Self::begin_upload`] and
    /// [`Self::finish_upload`] for callers that don't overlap batches. An
    /// empty batch is skipped entirely.
    pub async fn upload(
        &mut self,
        store: &dyn ImageStore,
        files: Vec<UploadFile>,
    ) -> Result<(), StoreError> {
        if files.is_empty() {
            return Ok(());
        }
        self.begin_upload();
        let outcome = store.upload(files).await;
        self.finish_upload(outcome)
    }

    /// Whether any started upload batch has not finished yet.
    pub fn is_uploading(&self) -> bool {
        self.uploads_in_flight > 0
    }

    /// Rearrange the form's images to match `order`.
    ///
    /// Named ids come first, in the given order. Images not named keep their
    /// relative order behind them; ids naming no image are ignored.
    pub fn reorder_images(&mut self, order: &[ImageId]) {
        let mut remaining = std::mem::take(&mut self.draft.images);
        let mut reordered = Vec::with_capacity(remaining.len());
        for id in order {
            if let Some(pos) = remaining.iter().position(|image| image.id == *id) {
                reordered.push(remaining.remove(pos));
            }
        }
        reordered.extend(remaining);
        self.draft.images = reordered;
    }

    /// Validate and persist the form.
    ///
    /// A form seeded from a record updates it, a blank form creates one. The
    /// form itself is left as-is either way; refs from batches still in
    /// flight are not part of the saved record.
    pub async fn save(&self, store: &dyn ProductStore) -> Result<Product, FormError> {
        self.draft.validate()?;
        let saved = match self.product_id {
            Some(id) => store.update(id, self.draft.clone()).await?,
            None => store.create(self.draft.clone()).await?,
        };
        tracing::info!(product_id = %saved.id, "saved product");
        Ok(saved)
    }
}
