//! Category records and the property definitions they declare.

use serde::{Deserialize, Serialize};

use shopkeeper_core::{CategoryId, Entity, PropertyId};

/// A property a category declares for its products (e.g. "color").
///
/// `values` lists the choices offered when filling the property; binding does
/// not enforce membership, so a stored value may fall outside this list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub id: PropertyId,
    pub name: String,
    pub values: Vec<String>,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            id: PropertyId::new(),
            name: name.into(),
            values,
        }
    }
}

/// A catalog category, optionally parented to another category.
///
/// `parent` is a plain id reference. Nothing guarantees the referenced
/// category exists in a given catalog snapshot; resolution treats a dangling
/// link as the end of the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub parent: Option<CategoryId>,
    pub properties: Vec<PropertyDefinition>,
}

impl Category {
    /// A root category with no parent and no declared properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            parent: None,
            properties: Vec::new(),
        }
    }

    /// A category parented to `parent`, with no declared properties.
    pub fn child_of(name: impl Into<String>, parent: CategoryId) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            parent: Some(parent),
            properties: Vec::new(),
        }
    }

    pub fn with_properties(mut self, properties: Vec<PropertyDefinition>) -> Self {
        self.properties = properties;
        self
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }
}
