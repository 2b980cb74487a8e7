//! podtrack - Podcast catalog for publishers, mood-based picks for listeners
//!
//! Publishers maintain an in-memory catalog of podcasts; customers ask for
//! recommendations from a fixed mood table. Nothing is persisted between
//! runs.
//!
//! # Modules
//!
//! - `catalog`: Podcast store (create, list, update, delete) and its locked wrapper
//! - `recommend`: Immutable mood-to-titles index
//! - `tasks`: Publisher productivity board
//! - `service`: Request/response dispatch used by front ends
//! - `domain`: Data structures (Podcast, Task)
//! - `config`: Config file and environment resolution
//! - `cli`: Command-line interface and interactive menu
//!
//! # Usage
//!
//! ```bash
//! # Interactive menu
//! podtrack
//!
//! # One-shot recommendation
//! podtrack recommend melancholic
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod recommend;
pub mod service;
pub mod tasks;

// Re-export main types at crate root for convenience
pub use catalog::{CatalogError, CatalogStore, Outcome, SharedCatalog};
pub use domain::{Podcast, PodcastRow, Task};
pub use recommend::{MoodEntry, MoodIndex, Recommendation};
pub use service::{PodTrack, Request, Response};
pub use tasks::{TaskBoard, TaskError};
