//! Round gateway: course-scoped load/save/clear over a key-value store.
//!
//! Every failure is logged and swallowed. A broken store degrades to "nothing saved",
//! never to an error the scorecard has to handle.

use crate::models::Round;
use crate::storage::{KeyValueStore, StorageError};

/// Namespace for every key this app writes.
pub const STORAGE_PREFIX: &str = "minicard:";

/// Written and removed by `is_available`.
pub const PROBE_KEY: &str = "minicard:__probe";

/// Storage key for a course's active round.
pub fn storage_key(course_slug: &str) -> String {
    format!("{}{}", STORAGE_PREFIX, course_slug)
}

#[derive(Debug, Default)]
pub struct RoundGateway<S> {
    store: S,
}

impl<S: KeyValueStore> RoundGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Probe with a throwaway write. Any failure reads as `false`.
    pub fn is_available(&self) -> bool {
        let probe = self
            .store
            .set(PROBE_KEY, "1")
            .and_then(|()| self.store.remove(PROBE_KEY));
        match probe {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Storage probe failed: {}", e);
                false
            }
        }
    }

    /// Saved round for a course. Missing, unreadable, or malformed data all give `None`.
    pub fn load(&self, course_slug: &str) -> Option<Round> {
        let key = storage_key(course_slug);
        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to load score state for {}: {}", course_slug, e);
                return None;
            }
        };
        let round: Round = match serde_json::from_str(&raw) {
            Ok(round) => round,
            Err(e) => {
                log::warn!("Discarding unreadable score state for {}: {}", course_slug, e);
                return None;
            }
        };
        if let Err(e) = round.validate() {
            log::warn!("Discarding invalid score state for {}: {}", course_slug, e);
            return None;
        }
        Some(round)
    }

    /// Overwrite the course's saved round. Best effort.
    pub fn save(&self, course_slug: &str, round: &Round) {
        let result = serde_json::to_string(round)
            .map_err(StorageError::from)
            .and_then(|raw| self.store.set(&storage_key(course_slug), &raw));
        if let Err(e) = result {
            log::warn!("Failed to save score state for {}: {}", course_slug, e);
        }
    }

    /// Drop the course's saved round. Best effort.
    pub fn clear(&self, course_slug: &str) {
        if let Err(e) = self.store.remove(&storage_key(course_slug)) {
            log::warn!("Failed to clear score state for {}: {}", course_slug, e);
        }
    }
}
