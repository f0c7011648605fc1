//! `shopkeeper-catalog` — category tree and property inheritance.
//!
//! Categories form a parent-linked forest; each category declares property
//! definitions its products can fill. [`resolve_properties`] collects the
//! definitions that apply to a selected category, nearest first.

pub mod category;
pub mod resolver;

pub use category::{Category, PropertyDefinition};
pub use resolver::{ResolveError, resolve_properties};
