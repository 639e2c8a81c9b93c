//! Selection engine properties over the built-in dataset.

use quoterm::catalog::{Catalog, Category, CategoryFilter};
use quoterm::selection::pick_next;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

#[test]
fn never_repeats_the_previous_quote_when_alternatives_exist() {
    let catalog = Catalog::builtin();
    let mut rng = StdRng::seed_from_u64(100);

    for filter in CategoryFilter::CHOICES {
        for previous in catalog.by_category(filter) {
            for _ in 0..25 {
                let quote = pick_next(catalog, filter, Some(previous.id), &mut rng).unwrap();
                assert_ne!(
                    quote.id, previous.id,
                    "repeat under filter {filter} with previous {}",
                    previous.id
                );
            }
        }
    }
}

#[test]
fn every_drawn_quote_matches_the_filter() {
    let catalog = Catalog::builtin();
    let mut rng = StdRng::seed_from_u64(101);

    for category in Category::ALL {
        let filter = CategoryFilter::Only(category);
        for _ in 0..50 {
            let quote = pick_next(catalog, filter, None, &mut rng).unwrap();
            assert_eq!(quote.category, category);
        }
    }
}

#[test]
fn all_sentinel_draws_from_the_full_dataset() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.by_category(CategoryFilter::All).len(), 25);

    let mut rng = StdRng::seed_from_u64(102);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..2000 {
        let quote = pick_next(catalog, CategoryFilter::All, None, &mut rng).unwrap();
        seen.insert(quote.id);
    }
    assert_eq!(seen.len(), 25);
}

#[test]
fn coding_pool_draws_are_roughly_uniform_and_exclude_the_previous() {
    let catalog = Catalog::builtin();
    let filter = CategoryFilter::Only(Category::Coding);
    let mut rng = StdRng::seed_from_u64(103);

    let mut counts: HashMap<u32, usize> = HashMap::new();
    for _ in 0..1000 {
        let quote = pick_next(catalog, filter, Some(12), &mut rng).unwrap();
        *counts.entry(quote.id).or_default() += 1;
    }

    assert_eq!(counts.get(&12), None);
    // Expected 250 each over {11, 13, 14, 15}; allow a wide statistical margin.
    for id in [11, 13, 14, 15] {
        let count = counts.get(&id).copied().unwrap_or(0);
        assert!(count > 150, "quote {id} drawn only {count} times");
        assert!(count < 350, "quote {id} drawn {count} times");
    }
}
