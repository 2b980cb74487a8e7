//! Domain types for podtrack.
//!
//! This module contains the core data structures:
//! - Podcast: A catalog entry and its listing row
//! - Task: A publisher to-do item

pub mod podcast;
pub mod task;

// Re-export commonly used types
pub use podcast::{Podcast, PodcastRow};
pub use task::Task;
