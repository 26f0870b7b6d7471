// src/store.rs
//
// Result store: the last fetched record set, its fetch status, and the
// durable cache that lets the table survive a restart.
//
// Records are schema-less JSON objects. serde_json's preserve_order feature
// keeps key order, which matters because the table's column schema is the
// first record's key order.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;

use crate::config::consts::{RESULTS_FILE, STORE_DIR};
use crate::error::PersistenceError;

/// One row of search-result data: field name → scalar value.
pub type Record = serde_json::Map<String, Value>;

/// Lifecycle of the last search request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// The full in-memory record set plus fetch lifecycle state.
///
/// Invariants: `records` is always a real (possibly empty) vector, and
/// `error` is only set while `status == Failed`.
#[derive(Clone, Debug, Default)]
pub struct ResultSet {
    pub records: Vec<Record>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/* ---------------- Persistence port ---------------- */

/// Durable storage for the cached record set. `load` returning `None`
/// means "no saved state", which callers treat the same as an empty set.
pub trait Persistence: Send {
    fn load(&self) -> Result<Option<Vec<Record>>, PersistenceError>;
    fn save(&self, records: &[Record]) -> Result<(), PersistenceError>;
    fn clear(&self) -> Result<(), PersistenceError>;
}

/// Production persistence: one JSON array in `.store/results.json`.
pub struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(STORE_DIR).join(RESULTS_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io { path: self.path.clone(), source }
    }
}

impl Default for FilePersistence {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl Persistence for FilePersistence {
    fn load(&self) -> Result<Option<Vec<Record>>, PersistenceError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path).map_err(|e| self.io_err(e))?;
        let records: Vec<Record> = serde_json::from_str(&text)?;
        Ok(Some(records))
    }

    fn save(&self, records: &[Record]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
            }
        }
        let text = serde_json::to_string(records)?;
        fs::write(&self.path, text).map_err(|e| self.io_err(e))
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_err(e)),
        }
    }
}

/// In-memory fake for tests and headless use.
#[derive(Default)]
pub struct MemoryPersistence {
    slot: Mutex<Option<Vec<Record>>>,
}

impl Persistence for MemoryPersistence {
    fn load(&self) -> Result<Option<Vec<Record>>, PersistenceError> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn save(&self, records: &[Record]) -> Result<(), PersistenceError> {
        *self.slot.lock().unwrap() = Some(records.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

/* ---------------- Result store ---------------- */

/// Single writer for the result set. Fetch lifecycle events come in,
/// state changes and cache writes go out. Persistence failures are logged
/// and swallowed; a broken cache must never take the search down with it.
pub struct ResultStore {
    set: ResultSet,
    persist: Box<dyn Persistence>,
}

impl ResultStore {
    pub fn new(persist: Box<dyn Persistence>) -> Self {
        Self { set: ResultSet::default(), persist }
    }

    /// Current snapshot for the view layer.
    pub fn snapshot(&self) -> &ResultSet {
        &self.set
    }

    /// Startup: adopt the durable copy if one exists and parses.
    /// Absence and corruption both land on an empty Idle state.
    pub fn rehydrate(&mut self) {
        match self.persist.load() {
            Ok(Some(records)) => {
                let status =
                    if records.is_empty() { FetchStatus::Idle } else { FetchStatus::Succeeded };
                logf!("Store: Rehydrated {} cached record(s)", records.len());
                self.set = ResultSet { records, status, error: None };
            }
            Ok(None) => {
                logd!("Store: No cached results");
                self.set = ResultSet::default();
            }
            Err(e) => {
                loge!("Store: Rehydrate failed, starting empty: {}", e);
                self.set = ResultSet::default();
            }
        }
    }

    pub fn on_fetch_start(&mut self) {
        self.set.status = FetchStatus::Loading;
        self.set.error = None;
    }

    /// Replace the record set verbatim and persist it. An empty result is a
    /// valid "no results" outcome, distinct from failure.
    pub fn on_fetch_success(&mut self, records: Vec<Record>) {
        if let Err(e) = self.persist.save(&records) {
            loge!("Store: Cache save failed: {}", e);
        }
        logf!("Store: Fetch succeeded, {} record(s)", records.len());
        self.set = ResultSet { records, status: FetchStatus::Succeeded, error: None };
    }

    /// Keep whatever records we had; stale-but-available beats gone.
    pub fn on_fetch_failure(&mut self, message: impl Into<String>) {
        let message = message.into();
        loge!("Store: Fetch failed: {}", message);
        self.set.status = FetchStatus::Failed;
        self.set.error = Some(message);
    }

    /// Explicit user reset: empty Idle state, durable copy removed.
    pub fn reset(&mut self) {
        if let Err(e) = self.persist.clear() {
            loge!("Store: Cache clear failed: {}", e);
        }
        self.set = ResultSet::default();
    }
}
