//! `shopkeeper-core` — domain foundation building blocks.
//!
//! Identifiers, the domain error model, and the entity seam shared by every
//! other crate. Pure domain only; infrastructure concerns live elsewhere.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, find_by_id, replace_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ImageId, ProductId, PropertyId, UserId};
