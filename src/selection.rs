//! Random quote selection with a non-repeat policy.

use crate::catalog::{Catalog, CategoryFilter, Quote, QuoteId};
use rand::Rng;

/// Selection state owned by the session: the active filter and the last
/// shown quote. Never ambient; passed explicitly wherever it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub filter: CategoryFilter,
    pub current: Option<QuoteId>,
}

/// Draw a uniformly random quote from the filtered pool.
///
/// Returns `None` when the pool is empty. When the pool has more than one
/// element the draw is resampled until it differs from `previous`; a
/// single-element pool returns its member even when it equals `previous`,
/// which is the non-repeat policy's explicit boundary case.
pub fn pick_next<'a, R: Rng>(
    catalog: &'a Catalog,
    filter: CategoryFilter,
    previous: Option<QuoteId>,
    rng: &mut R,
) -> Option<&'a Quote> {
    let pool = catalog.by_category(filter);
    if pool.is_empty() {
        return None;
    }
    loop {
        let pick = pool[rng.gen_range(0..pool.len())];
        if pool.len() > 1 && previous == Some(pick.id) {
            continue;
        }
        return Some(pick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_state_is_all_with_no_current_quote() {
        let state = SelectionState::default();
        assert_eq!(state.filter, CategoryFilter::All);
        assert_eq!(state.current, None);
    }

    #[test]
    fn draw_respects_the_filter() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let quote = pick_next(
                Catalog::builtin(),
                CategoryFilter::Only(Category::Love),
                None,
                &mut rng,
            )
            .unwrap();
            assert_eq!(quote.category, Category::Love);
        }
    }

    #[test]
    fn previous_quote_is_never_redrawn_when_alternatives_exist() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let quote = pick_next(Catalog::builtin(), CategoryFilter::All, Some(12), &mut rng)
                .unwrap();
            assert_ne!(quote.id, 12);
        }
    }

    #[test]
    fn single_element_pool_repeats_its_only_member() {
        static LONE: [Quote; 1] = [Quote {
            id: 42,
            text: "only one",
            author: "nobody",
            category: Category::Coding,
        }];
        static CATALOG: Catalog = Catalog::new(&LONE);

        let mut rng = StdRng::seed_from_u64(3);
        let quote = pick_next(
            &CATALOG,
            CategoryFilter::Only(Category::Coding),
            Some(42),
            &mut rng,
        )
        .unwrap();
        assert_eq!(quote.id, 42);
    }

    #[test]
    fn empty_pool_returns_none() {
        static EMPTY: [Quote; 0] = [];
        static CATALOG: Catalog = Catalog::new(&EMPTY);

        let mut rng = StdRng::seed_from_u64(4);
        assert!(pick_next(&CATALOG, CategoryFilter::All, None, &mut rng).is_none());
    }
}
