//! Lock-guarded catalog handle for concurrent callers.
//!
//! `update` and `delete` scan and then mutate, so every operation holds the
//! single catalog mutex for its whole duration.

use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use super::store::{CatalogStore, Outcome};
use crate::domain::{Podcast, PodcastRow};

/// Errors from the shared catalog handle
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog lock poisoned by a panicking writer")]
    LockPoisoned,
}

/// Cloneable handle to one catalog shared between threads
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<CatalogStore>>,
}

impl SharedCatalog {
    /// Wrap an existing store
    pub fn new(store: CatalogStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, CatalogStore>, CatalogError> {
        self.inner.lock().map_err(|_| CatalogError::LockPoisoned)
    }

    /// Append a new record and return the confirmation text
    pub fn create(
        &self,
        id: i64,
        title: impl Into<String>,
        mood: impl Into<String>,
        tags: Vec<String>,
        seats: i64,
    ) -> Result<String, CatalogError> {
        Ok(self.lock()?.create(id, title, mood, tags, seats))
    }

    /// Rows as of the moment the lock was held
    pub fn list(&self) -> Result<Vec<PodcastRow>, CatalogError> {
        Ok(self.lock()?.list())
    }

    /// Clone of the first record carrying `id`
    pub fn get(&self, id: i64) -> Result<Option<Podcast>, CatalogError> {
        Ok(self.lock()?.get(id).cloned())
    }

    /// Overwrite title and mood of the first record carrying `id`
    pub fn update(
        &self,
        id: i64,
        new_title: impl Into<String>,
        new_mood: impl Into<String>,
    ) -> Result<Outcome, CatalogError> {
        Ok(self.lock()?.update(id, new_title, new_mood))
    }

    /// Remove the first record carrying `id`
    pub fn delete(&self, id: i64) -> Result<Outcome, CatalogError> {
        Ok(self.lock()?.delete(id))
    }

    /// Get the number of records
    pub fn len(&self) -> Result<usize, CatalogError> {
        Ok(self.lock()?.len())
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> Result<bool, CatalogError> {
        Ok(self.lock()?.is_empty())
    }
}
