// ── Durable key-value storage ──
//
// A tiny string-to-string store with the semantics the app needs from
// browser-style local storage: reads parse-or-default, writes are
// synchronous with the mutation that caused them and best-effort.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::CoreError;

/// Storage keys.
pub mod keys {
    pub const FAVORITES: &str = "favorites";
    pub const BOOKINGS: &str = "bookings";
    pub const USER_PROFILE: &str = "userProfile";
    pub const THEME: &str = "theme";
}

/// Synchronous string store. Implementations must be cheap to call from
/// inside an event handler.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// Shared handle used by the persistent stores.
pub type SharedKv = Arc<dyn KvStore>;

// ── Typed helpers ────────────────────────────────────────────────────

/// Read and decode a JSON value. Missing keys, unreadable storage and
/// malformed payloads all yield `None`; the latter two are logged.
pub fn read_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(error = %e, "storage read failed");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "discarding malformed stored value");
            None
        }
    }
}

/// Encode and store a JSON value. Failures are logged and swallowed so the
/// in-memory state stays authoritative for the session.
pub fn write_json<T: Serialize + ?Sized>(store: &dyn KvStore, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(|e| CoreError::storage(key, e))
        .and_then(|encoded| store.set(key, &encoded));
    if let Err(e) = result {
        warn!(error = %e, "storage write failed");
    }
}

/// Store a bare string (no JSON quoting), best-effort.
pub fn write_raw(store: &dyn KvStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        warn!(error = %e, "storage write failed");
    }
}

// ── FileStore ────────────────────────────────────────────────────────

/// All keys in one JSON object file. The whole file is rewritten on every
/// `set`; it is created on the first write.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; a file
    /// that is not a JSON object is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "storage file is corrupt, starting empty");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(CoreError::storage(&path.display().to_string(), e)),
        };
        debug!(path = %path.display(), keys = entries.len(), "storage opened");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, key: &str, entries: &BTreeMap<String, String>) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| CoreError::storage(key, e))?;
        }
        let encoded = serde_json::to_string_pretty(entries).map_err(|e| CoreError::storage(key, e))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded).map_err(|e| CoreError::storage(key, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| CoreError::storage(key, e))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        self.flush(key, &entries)
    }
}

// ── MemoryStore ──────────────────────────────────────────────────────

/// Volatile store for tests and for sessions whose storage file could not
/// be opened.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. to simulate a previous session.
    pub fn with(self, key: &str, value: &str) -> Self {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        self
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
