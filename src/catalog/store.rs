//! In-memory podcast catalog.
//!
//! Records live in a `Vec` in insertion order. Lookups are linear scans and
//! the first record with a matching id wins; ids are not checked for
//! uniqueness on create, so duplicates are possible and only the earliest
//! one is reachable through `update` and `delete`.

use serde::Serialize;
use tracing::debug;

use crate::domain::{Podcast, PodcastRow};

/// Result of an id-targeted mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Whether a record with the requested id existed
    pub found: bool,
}

impl Outcome {
    pub const FOUND: Outcome = Outcome { found: true };
    pub const NOT_FOUND: Outcome = Outcome { found: false };
}

/// Catalog of podcast records owned by the publisher
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    podcasts: Vec<Podcast>,
}

impl CatalogStore {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the three startup records
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for podcast in seed_podcasts() {
            store.insert(podcast);
        }
        store
    }

    /// Append a new record and return the confirmation text.
    ///
    /// Never fails: duplicate ids, negative seats and empty titles are all
    /// accepted as given.
    pub fn create(
        &mut self,
        id: i64,
        title: impl Into<String>,
        mood: impl Into<String>,
        tags: Vec<String>,
        seats: i64,
    ) -> String {
        let podcast = Podcast {
            id,
            title: title.into(),
            mood: mood.into(),
            tags,
            seats,
        };
        self.insert(podcast)
    }

    /// Append an already-built record and return the confirmation text
    pub fn insert(&mut self, podcast: Podcast) -> String {
        debug!(id = podcast.id, title = %podcast.title, "Podcast created");
        let message = format!("Podcast Created: {}", podcast.title);
        self.podcasts.push(podcast);
        message
    }

    /// Current records as listing rows, in insertion order
    pub fn list(&self) -> Vec<PodcastRow> {
        self.podcasts.iter().map(Podcast::row).collect()
    }

    /// All records, in insertion order
    pub fn podcasts(&self) -> &[Podcast] {
        &self.podcasts
    }

    /// First record carrying `id`
    pub fn get(&self, id: i64) -> Option<&Podcast> {
        self.podcasts.iter().find(|p| p.id == id)
    }

    /// Overwrite title and mood of the first record carrying `id`.
    ///
    /// Tags and seats are left untouched.
    pub fn update(
        &mut self,
        id: i64,
        new_title: impl Into<String>,
        new_mood: impl Into<String>,
    ) -> Outcome {
        match self.podcasts.iter_mut().find(|p| p.id == id) {
            Some(podcast) => {
                podcast.title = new_title.into();
                podcast.mood = new_mood.into();
                debug!(id, title = %podcast.title, "Podcast updated");
                Outcome::FOUND
            }
            None => {
                debug!(id, "Update target not found");
                Outcome::NOT_FOUND
            }
        }
    }

    /// Remove the first record carrying `id`, keeping the others in order
    pub fn delete(&mut self, id: i64) -> Outcome {
        match self.podcasts.iter().position(|p| p.id == id) {
            Some(pos) => {
                let removed = self.podcasts.remove(pos);
                debug!(id, title = %removed.title, "Podcast deleted");
                Outcome::FOUND
            }
            None => {
                debug!(id, "Delete target not found");
                Outcome::NOT_FOUND
            }
        }
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.podcasts.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.podcasts.is_empty()
    }
}

/// Records present at startup
pub fn seed_podcasts() -> Vec<Podcast> {
    vec![
        Podcast::new(1, "Calm Talks", "Tired")
            .with_tags(["relaxing", "calm", "meditation"])
            .with_seats(0),
        Podcast::new(2, "Energetic Vibes", "Happy")
            .with_tags(["energetic", "party", "dance"])
            .with_seats(5),
        Podcast::new(3, "Spiritual Awakening", "Grounded")
            .with_tags(["spiritual", "meditation", "calm"])
            .with_seats(3),
    ]
}
