//! Mood-based recommendations for listeners.
//!
//! The index is built once at startup and never mutated. Lookup is a
//! case-insensitive exact match on the mood name; an unknown mood is an
//! ordinary outcome, not an error.

use serde::{Deserialize, Serialize};

/// A mood and the titles suggested for it, in authored order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub name: String,
    #[serde(default)]
    pub recommended: Vec<String>,
}

impl MoodEntry {
    pub fn new(name: impl Into<String>, recommended: &[&str]) -> Self {
        Self {
            name: name.into(),
            recommended: recommended.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Answer to a recommendation lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Suggested titles, empty when `found` is false
    pub titles: Vec<String>,
    pub found: bool,
}

impl Recommendation {
    fn none() -> Self {
        Self {
            titles: Vec::new(),
            found: false,
        }
    }
}

/// Read-only mapping from mood name to recommended titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodIndex {
    entries: Vec<MoodEntry>,
}

impl Default for MoodIndex {
    fn default() -> Self {
        Self::new(default_moods())
    }
}

impl MoodIndex {
    pub fn new(entries: Vec<MoodEntry>) -> Self {
        Self { entries }
    }

    /// Look up the titles for a mood, ignoring case.
    ///
    /// When several entries share a name the first one answers.
    pub fn recommend(&self, mood: &str) -> Recommendation {
        let wanted = mood.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.name.to_lowercase() == wanted)
            .map(|entry| Recommendation {
                titles: entry.recommended.clone(),
                found: true,
            })
            .unwrap_or_else(Recommendation::none)
    }

    /// Configured moods in table order
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Configured mood names in table order
    pub fn mood_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

/// The built-in mood table
pub fn default_moods() -> Vec<MoodEntry> {
    vec![
        MoodEntry::new("Tired", &["Calm Talks", "Relaxing Beats", "Evening Chill"]),
        MoodEntry::new(
            "Melancholic",
            &["Sad Songs", "Blue Skies", "Reflective Moments"],
        ),
        MoodEntry::new(
            "Happy",
            &["Energetic Vibes", "Party Time", "Adventure Begins"],
        ),
        MoodEntry::new(
            "Grounded",
            &[
                "Spiritual Awakening",
                "Peaceful Meditation",
                "Deep Reflections",
            ],
        ),
    ]
}
