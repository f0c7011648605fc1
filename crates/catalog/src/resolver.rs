//! Property resolution over the category parent chain.
//!
//! A product's fillable properties are the ones its category declares plus
//! everything inherited from ancestor categories, nearest category first.

use std::collections::HashSet;

use thiserror::Error;

use shopkeeper_core::{CategoryId, find_by_id};

use crate::category::{Category, PropertyDefinition};

/// Resolution failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The parent chain loops back through an already-visited category.
    #[error("category parent chain loops back through {category}")]
    CycleDetected { category: CategoryId },
}

/// Collect the property definitions that apply to `selected`.
///
/// Walks the parent chain starting at the selected category and appends each
/// category's own properties in walk order, so the selected category's
/// properties come before inherited ones. Lookups scan `categories` linearly
/// and take the first id match.
///
/// Missing data fails open: with no selection or an unknown `selected` id the
/// resolution is empty, and a dangling parent link ends the walk, keeping what
/// was collected so far. A parent chain that revisits a category is reported
/// as [`ResolveError::CycleDetected`] rather than walked forever.
pub fn resolve_properties(
    categories: &[Category],
    selected: Option<CategoryId>,
) -> Result<Vec<PropertyDefinition>, ResolveError> {
    let Some(selected) = selected else {
        return Ok(Vec::new());
    };

    let mut resolved = Vec::new();
    let mut visited: HashSet<CategoryId> = HashSet::new();

    let Some(mut current) = find_by_id(categories, &selected) else {
        return Ok(resolved);
    };

    loop {
        if !visited.insert(current.id) {
            return Err(ResolveError::CycleDetected {
                category: current.id,
            });
        }
        resolved.extend(current.properties.iter().cloned());

        let Some(parent_id) = current.parent else {
            break;
        };
        match find_by_id(categories, &parent_id) {
            Some(parent) => current = parent,
            // Dangling parent link ends the chain.
            None => break,
        }
    }

    Ok(resolved)
}
