//! The session controller.
//!
//! One instance owns the selection state and the favorites set over the
//! catalog; every UI operation goes through it. There are no ambient
//! globals, so the whole flow runs identically under test and in the TUI.

use crate::catalog::{Catalog, CategoryFilter, Quote, QuoteId};
use crate::favorites::{FavoriteOutcome, Favorites};
use crate::selection::{pick_next, SelectionState};
use crate::storage::KeyValueStore;
use rand::Rng;

pub struct Session {
    catalog: &'static Catalog,
    selection: SelectionState,
    favorites: Favorites,
}

impl Session {
    /// Build a session, loading persisted favorites through the store.
    pub fn new(
        catalog: &'static Catalog,
        store: Box<dyn KeyValueStore>,
        filter: CategoryFilter,
    ) -> Self {
        Self {
            catalog,
            selection: SelectionState {
                filter,
                current: None,
            },
            favorites: Favorites::load(store),
        }
    }

    /// Draw the next quote under the active filter and record it as current.
    /// An empty pool returns `None` and leaves the current quote untouched.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> Option<&'static Quote> {
        let quote = pick_next(self.catalog, self.selection.filter, self.selection.current, rng)?;
        self.selection.current = Some(quote.id);
        Some(quote)
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.selection.filter = filter;
    }

    pub fn filter(&self) -> CategoryFilter {
        self.selection.filter
    }

    pub fn current_quote(&self) -> Option<&'static Quote> {
        self.selection
            .current
            .and_then(|id| self.catalog.find(id))
    }

    /// Toggle the current quote's favorite status. `None` when no quote has
    /// been shown yet.
    pub fn toggle_current(&mut self) -> Option<FavoriteOutcome> {
        let id = self.selection.current?;
        Some(self.favorites.toggle(id))
    }

    pub fn is_current_favorite(&self) -> bool {
        self.selection
            .current
            .is_some_and(|id| self.favorites.is_favorite(id))
    }

    pub fn remove_favorite(&mut self, id: QuoteId) -> bool {
        self.favorites.remove(id)
    }

    pub fn favorite_quotes(&self) -> Vec<&'static Quote> {
        self.favorites.resolve(self.catalog)
    }

    pub fn favorites_count(&self) -> usize {
        self.favorites.count()
    }

    pub fn favorite_ids(&self) -> &[QuoteId] {
        self.favorites.ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_session(store: &MemoryStore, filter: CategoryFilter) -> Session {
        Session::new(Catalog::builtin(), Box::new(store.clone()), filter)
    }

    #[test]
    fn advance_records_the_drawn_quote_as_current() {
        let store = MemoryStore::new();
        let mut session = make_session(&store, CategoryFilter::All);
        let mut rng = StdRng::seed_from_u64(11);

        assert!(session.current_quote().is_none());
        let quote = session.advance(&mut rng).unwrap();
        assert_eq!(session.current_quote().map(|q| q.id), Some(quote.id));
    }

    #[test]
    fn consecutive_draws_never_repeat() {
        let store = MemoryStore::new();
        let mut session = make_session(&store, CategoryFilter::All);
        let mut rng = StdRng::seed_from_u64(12);

        let mut previous = session.advance(&mut rng).unwrap().id;
        for _ in 0..100 {
            let next = session.advance(&mut rng).unwrap().id;
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn toggle_current_before_first_draw_is_none() {
        let store = MemoryStore::new();
        let mut session = make_session(&store, CategoryFilter::All);
        assert!(session.toggle_current().is_none());
    }

    #[test]
    fn toggle_current_round_trips_membership() {
        let store = MemoryStore::new();
        let mut session = make_session(&store, CategoryFilter::All);
        let mut rng = StdRng::seed_from_u64(13);
        session.advance(&mut rng);

        assert_eq!(session.toggle_current(), Some(FavoriteOutcome::Added));
        assert!(session.is_current_favorite());
        assert_eq!(session.favorites_count(), 1);

        assert_eq!(session.toggle_current(), Some(FavoriteOutcome::Removed));
        assert!(!session.is_current_favorite());
        assert_eq!(session.favorites_count(), 0);
    }

    #[test]
    fn startup_loads_persisted_favorites() {
        let store = MemoryStore::new();
        store.seed("favorites", "[2,9]");
        let session = make_session(&store, CategoryFilter::All);
        assert_eq!(session.favorite_ids(), &[2, 9]);
        let quotes = session.favorite_quotes();
        assert_eq!(quotes.iter().map(|q| q.id).collect::<Vec<_>>(), vec![2, 9]);
    }

    #[test]
    fn remove_favorite_reports_whether_anything_changed() {
        let store = MemoryStore::new();
        store.seed("favorites", "[4]");
        let mut session = make_session(&store, CategoryFilter::All);
        assert!(session.remove_favorite(4));
        assert!(!session.remove_favorite(4));
    }
}
