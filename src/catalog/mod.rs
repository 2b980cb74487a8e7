//! Podcast catalog owned by the publisher.
//!
//! `CatalogStore` is the plain single-threaded store. `SharedCatalog` wraps
//! one behind a mutex for front ends that serve several callers at once.

pub mod shared;
pub mod store;

pub use shared::{CatalogError, SharedCatalog};
pub use store::{seed_podcasts, CatalogStore, Outcome};
