//! `shopkeeper-infra` — store seams and in-memory backends.
//!
//! The traits here are the panel's only window onto persistence. The
//! in-memory implementations back tests and local development; a real
//! deployment swaps in implementations talking to its own backends.

pub mod stores;

pub use stores::{
    CategoryStore, ImageStore, InMemoryCategoryStore, InMemoryImageStore, InMemoryProductStore,
    InMemoryUserStore, ProductStore, StoreError, UploadFile, UserStore,
};
