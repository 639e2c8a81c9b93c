//! Favorites round trips through the file-backed store.

use quoterm::catalog::{Catalog, CategoryFilter};
use quoterm::favorites::FAVORITES_KEY;
use quoterm::session::Session;
use quoterm::storage::JsonFileStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;

fn session_over(dir: &TempDir) -> Session {
    let store = JsonFileStore::new(dir.path());
    Session::new(Catalog::builtin(), Box::new(store), CategoryFilter::All)
}

fn slot_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join(format!("{FAVORITES_KEY}.json"))
}

#[test]
fn toggle_writes_the_favorites_file() {
    let dir = TempDir::new().unwrap();
    let mut session = session_over(&dir);
    let mut rng = StdRng::seed_from_u64(1);

    let quote = session.advance(&mut rng).unwrap();
    session.toggle_current().unwrap();

    let content = fs::read_to_string(slot_path(&dir)).unwrap();
    assert_eq!(content, format!("[{}]", quote.id));
}

#[test]
fn a_fresh_session_restores_favorites_in_insertion_order() {
    let dir = TempDir::new().unwrap();
    {
        let mut session = session_over(&dir);
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..3 {
            session.advance(&mut rng);
            session.toggle_current();
        }
    }

    let earlier = session_over(&dir).favorite_ids().to_vec();
    assert_eq!(earlier.len(), 3);

    let reloaded = session_over(&dir);
    assert_eq!(reloaded.favorite_ids(), earlier.as_slice());
    assert_eq!(
        reloaded
            .favorite_quotes()
            .iter()
            .map(|q| q.id)
            .collect::<Vec<_>>(),
        earlier
    );
}

#[test]
fn a_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let session = session_over(&dir);
    assert_eq!(session.favorites_count(), 0);
}

#[test]
fn a_malformed_file_starts_empty_and_heals_on_next_toggle() {
    let dir = TempDir::new().unwrap();
    fs::write(slot_path(&dir), "{definitely not an array").unwrap();

    let mut session = session_over(&dir);
    assert_eq!(session.favorites_count(), 0);

    let mut rng = StdRng::seed_from_u64(3);
    let quote = session.advance(&mut rng).unwrap();
    session.toggle_current();

    let content = fs::read_to_string(slot_path(&dir)).unwrap();
    assert_eq!(content, format!("[{}]", quote.id));
}

#[test]
fn removing_a_favorite_persists_the_shrunken_list() {
    let dir = TempDir::new().unwrap();
    fs::write(slot_path(&dir), "[10, 20, 3]").unwrap();

    let mut session = session_over(&dir);
    assert!(session.remove_favorite(20));

    let content = fs::read_to_string(slot_path(&dir)).unwrap();
    assert_eq!(content, "[10,3]");
    assert_eq!(session_over(&dir).favorite_ids(), &[10, 3]);
}
