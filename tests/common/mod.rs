//! Shared test utilities.

#![allow(dead_code)]

use quoterm::catalog::{Catalog, CategoryFilter};
use quoterm::session::Session;
use quoterm::share::{ShareError, ShareTarget};
use quoterm::storage::MemoryStore;
use quoterm::ui::{App, UiTimings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

/// Share target that records copies and opens instead of touching the
/// system clipboard or browser. Cloning shares the recording, so a test
/// can keep one handle and give another to the app.
#[derive(Clone, Default)]
pub struct RecordingShare {
    inner: Arc<Mutex<ShareInner>>,
}

#[derive(Default)]
struct ShareInner {
    copied: Vec<String>,
    opened: Vec<String>,
    fail: bool,
}

impl RecordingShare {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail(&self, fail: bool) {
        self.lock().fail = fail;
    }

    pub fn copied(&self) -> Vec<String> {
        self.lock().copied.clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.lock().opened.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ShareInner> {
        self.inner.lock().unwrap()
    }
}

impl ShareTarget for RecordingShare {
    fn copy(&mut self, text: &str) -> Result<(), ShareError> {
        let mut inner = self.lock();
        if inner.fail {
            return Err(ShareError::Clipboard("injected failure".to_string()));
        }
        inner.copied.push(text.to_string());
        Ok(())
    }

    fn open(&mut self, url: &str) -> Result<(), ShareError> {
        let mut inner = self.lock();
        if inner.fail {
            return Err(ShareError::Browser("injected failure".to_string()));
        }
        inner.opened.push(url.to_string());
        Ok(())
    }
}

pub fn make_session(store: &MemoryStore, filter: CategoryFilter) -> Session {
    Session::new(Catalog::builtin(), Box::new(store.clone()), filter)
}

/// App over an in-memory store and a recording share target, with a seeded
/// RNG so draws are deterministic.
pub fn make_app() -> (App, MemoryStore, RecordingShare) {
    let store = MemoryStore::new();
    let share = RecordingShare::new();
    let session = make_session(&store, CategoryFilter::All);
    let app = App::new(
        session,
        Box::new(share.clone()),
        UiTimings::default(),
        StdRng::seed_from_u64(7),
    );
    (app, store, share)
}
