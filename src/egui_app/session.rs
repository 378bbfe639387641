//! Session Store
//!
//! Persists the bearer token and the cached user profile across restarts.
//! The backing storage is a [`KeyValueStore`]: [`MemoryStorage`] for tests
//! and throwaway sessions, [`FileStorage`] for the desktop app.
//!
//! ## Layout
//!
//! ```text
//! <storage_dir>/session.json
//! {
//!   "token": "<bearer token>",
//!   "user": "{\"email\":\"me@mail.com\",\"categories\":[...]}"
//! }
//! ```
//!
//! Values are plain strings; the user profile is stored JSON-encoded.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::shared::error::StorageError;
use crate::shared::models::User;

/// Key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Key holding the JSON-encoded user profile
pub const USER_KEY: &str = "user";

/// Durable string key/value storage.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory storage for tests and sessions that should not outlive the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        lock(&self.values).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        lock(&self.values).remove(key);
        Ok(())
    }
}

/// File-backed storage: one JSON object rewritten on every change.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles.
    guard: Mutex<()>,
}

impl FileStorage {
    pub const FILENAME: &'static str = "session.json";

    /// Storage at `<dir>/session.json`. The directory is created on first write.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(Self::FILENAME),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> HashMap<String, String> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(err) => {
                tracing::warn!("cannot read {}: {}", self.path.display(), err);
                return HashMap::new();
            }
        };
        serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!("discarding corrupt session file {}: {}", self.path.display(), err);
            HashMap::new()
        })
    }

    fn write_all(&self, values: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(values)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = lock(&self.guard);
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = lock(&self.guard);
        let mut values = self.read_all();
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = lock(&self.guard);
        let mut values = self.read_all();
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

/// Point-in-time copy of the session, handed to controllers on mount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Token and cached profile on top of a [`KeyValueStore`].
///
/// Clones share the same backing storage.
#[derive(Clone, Debug)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    /// Bumped by every [`SessionStore::clear_session`].
    epoch: Arc<Mutex<u64>>,
}

impl SessionStore {
    pub fn new(storage: impl KeyValueStore + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
            epoch: Arc::new(Mutex::new(0)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    pub fn get_token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, token)
    }

    /// Number of times the session has been cleared.
    pub fn epoch(&self) -> u64 {
        *lock(&self.epoch)
    }

    /// Store `token` only if the session was not cleared since `epoch` was
    /// read. Returns whether the token was stored.
    pub fn set_token_since(&self, epoch: u64, token: &str) -> Result<bool, StorageError> {
        let current = lock(&self.epoch);
        if *current != epoch {
            return Ok(false);
        }
        self.storage.set(TOKEN_KEY, token)?;
        Ok(true)
    }

    /// Whether a token is present. Freshness is never checked.
    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    pub fn get_cached_user(&self) -> Option<User> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!("ignoring unreadable cached user: {}", err);
                None
            }
        }
    }

    pub fn set_cached_user(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user)?;
        self.storage.set(USER_KEY, &raw)
    }

    /// Forget both the token and the cached profile.
    pub fn clear_session(&self) -> Result<(), StorageError> {
        let mut epoch = lock(&self.epoch);
        *epoch += 1;
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;
        tracing::info!("session cleared");
        Ok(())
    }

    pub fn snapshot(&self) -> Session {
        Session {
            token: self.get_token(),
            user: self.get_cached_user(),
        }
    }
}
