//! Podcast records held by the catalog.

use serde::{Deserialize, Serialize};

/// A single podcast entry maintained by the publisher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Podcast {
    /// Caller-supplied identifier (not guaranteed unique)
    pub id: i64,

    /// Display name
    pub title: String,

    /// Free-form tone label
    pub mood: String,

    /// Ordered labels, may be empty
    #[serde(default)]
    pub tags: Vec<String>,

    /// Capacity counter, unbounded in both directions
    pub seats: i64,
}

impl Podcast {
    /// Create a new podcast with no tags and no seats
    pub fn new(id: i64, title: impl Into<String>, mood: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            mood: mood.into(),
            tags: Vec::new(),
            seats: 0,
        }
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the seat count
    pub fn with_seats(mut self, seats: i64) -> Self {
        self.seats = seats;
        self
    }

    /// Project the record onto its listing row
    pub fn row(&self) -> PodcastRow {
        PodcastRow {
            id: self.id,
            title: self.title.clone(),
            mood: self.mood.clone(),
            seats: self.seats,
        }
    }
}

/// One row of a catalog listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastRow {
    pub id: i64,
    pub title: String,
    pub mood: String,
    pub seats: i64,
}
