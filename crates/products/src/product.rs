//! Product records and drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopkeeper_core::{CategoryId, DomainError, DomainResult, ProductId};

use crate::image::ImageRef;
use crate::properties::PropertyValues;

/// The editable fields of a product, as sent to the product store.
///
/// A draft carries no id: the create path lets the store assign one, the
/// update path passes the existing id alongside. Timestamps are store-owned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    /// Price in the smallest currency unit (e.g. cents).
    pub price: u64,
    pub images: Vec<ImageRef>,
    pub category: Option<CategoryId>,
    pub properties: PropertyValues,
}

impl ProductDraft {
    /// Check the draft is storable.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("product title must not be empty"));
        }
        Ok(())
    }
}

/// A stored product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Price in the smallest currency unit (e.g. cents).
    pub price: u64,
    pub images: Vec<ImageRef>,
    pub category: Option<CategoryId>,
    pub properties: PropertyValues,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Materialize a draft into a stored record.
    pub fn from_draft(id: ProductId, draft: ProductDraft, at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            price: draft.price,
            images: draft.images,
            category: draft.category,
            properties: draft.properties,
            created_at: at,
            updated_at: at,
        }
    }

    /// Overwrite the editable fields from a draft, bumping `updated_at`.
    ///
    /// The id and `created_at` are untouched.
    pub fn apply_draft(&mut self, draft: ProductDraft, at: DateTime<Utc>) {
        self.title = draft.title;
        self.description = draft.description;
        self.price = draft.price;
        self.images = draft.images;
        self.category = draft.category;
        self.properties = draft.properties;
        self.updated_at = at;
    }

    /// Draft carrying this record's editable fields.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            images: self.images.clone(),
            category: self.category,
            properties: self.properties.clone(),
        }
    }
}
