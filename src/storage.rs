//! Durable key-value storage for small JSON payloads.
//!
//! One slot per key, stored as `<data_dir>/<key>.json`. The trait exists so
//! the favorites logic can run against an in-memory store under test.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors that can occur when accessing a storage slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A durable string slot per key.
pub trait KeyValueStore: Send {
    /// Read a slot. A missing slot is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a slot, creating it if absent.
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed store: one `<key>.json` file under a fixed directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read { path, source: err }),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        fs::create_dir_all(&self.dir).map_err(|err| StorageError::Write {
            path: path.clone(),
            source: err,
        })?;
        fs::write(&path, value).map_err(|err| StorageError::Write { path, source: err })
    }
}

/// In-memory store for tests. Cloning shares the underlying map, so a test
/// can hold one handle and hand another to the code under test. Read and
/// write faults can be injected to exercise the fail-soft paths.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot without counting as a write.
    pub fn seed(&self, key: &str, value: &str) {
        self.lock().entries.insert(key.to_string(), value.to_string());
    }

    /// Raw slot content, bypassing the fault switches.
    pub fn value(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    /// Number of successful `put` calls.
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    pub fn fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn injected(kind: &str) -> io::Error {
        io::Error::new(io::ErrorKind::Other, format!("injected {kind} fault"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.lock();
        if inner.fail_reads {
            return Err(StorageError::Read {
                path: PathBuf::from(format!("<memory>/{key}")),
                source: Self::injected("read"),
            });
        }
        Ok(inner.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(StorageError::Write {
                path: PathBuf::from(format!("<memory>/{key}")),
                source: Self::injected("write"),
            });
        }
        inner.entries.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}
