//! `shopkeeper-products` — product records and property value bindings.

pub mod image;
pub mod product;
pub mod properties;

pub use image::ImageRef;
pub use product::{Product, ProductDraft};
pub use properties::PropertyValues;
