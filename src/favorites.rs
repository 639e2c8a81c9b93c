//! The persisted favorites set.
//!
//! An ordered list of quote ids, no duplicates, written through to a
//! [`KeyValueStore`] as a JSON integer array under a fixed key. Persistence
//! faults never reach the caller: the in-memory set stays authoritative for
//! the session and the fault is logged.

use crate::catalog::{Catalog, Quote, QuoteId};
use crate::storage::KeyValueStore;
use tracing::warn;

/// Storage slot holding the favorites array, e.g. `[1, 7, 23]`.
pub const FAVORITES_KEY: &str = "favorites";

/// Result of a toggle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    Removed,
}

pub struct Favorites {
    ids: Vec<QuoteId>,
    store: Box<dyn KeyValueStore>,
}

impl Favorites {
    /// Load the persisted set. Absence, malformed content, and read faults
    /// all yield an empty set.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<QuoteId>>(&raw) {
                Ok(ids) => dedup_preserving_order(ids),
                Err(err) => {
                    warn!(%err, "malformed favorites entry, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "favorites load failed, starting empty");
                Vec::new()
            }
        };
        Self { ids, store }
    }

    pub fn is_favorite(&self, id: QuoteId) -> bool {
        self.ids.contains(&id)
    }

    /// Remove the id if present, append it otherwise. Writes through to the
    /// store on every call.
    pub fn toggle(&mut self, id: QuoteId) -> FavoriteOutcome {
        let outcome = match self.ids.iter().position(|fav| *fav == id) {
            Some(index) => {
                self.ids.remove(index);
                FavoriteOutcome::Removed
            }
            None => {
                self.ids.push(id);
                FavoriteOutcome::Added
            }
        };
        self.persist();
        outcome
    }

    /// Remove the id if present. Writes through only when a removal occurred.
    pub fn remove(&mut self, id: QuoteId) -> bool {
        let Some(index) = self.ids.iter().position(|fav| *fav == id) else {
            return false;
        };
        self.ids.remove(index);
        self.persist();
        true
    }

    /// Favorite quotes in insertion order. Ids with no matching quote are
    /// silently skipped.
    pub fn resolve(&self, catalog: &'static Catalog) -> Vec<&'static Quote> {
        self.ids.iter().filter_map(|id| catalog.find(*id)).collect()
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &[QuoteId] {
        &self.ids
    }

    fn persist(&mut self) {
        let encoded = match serde_json::to_string(&self.ids) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(%err, "favorites encode failed, skipping write");
                return;
            }
        };
        if let Err(err) = self.store.put(FAVORITES_KEY, &encoded) {
            warn!(%err, "favorites write failed, keeping in-memory state");
        }
    }
}

fn dedup_preserving_order(ids: Vec<QuoteId>) -> Vec<QuoteId> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}
