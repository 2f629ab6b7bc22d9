//! # Credential Store
//!
//! Single-slot persistence for the bearer token and the signed-in user's
//! profile.
//!
//! The store sits on top of a [`Storage`] backend, a plain string key-value
//! interface. [`MemoryStorage`] keeps everything in process;
//! [`FileStorage`] keeps a small JSON document on disk so a session survives
//! restarts.

use parking_lot::{Mutex, RwLock};
use pitchhub_types::UserProfile;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::error::{ErrorKind, RequestError};

/// Storage key of the bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Storage key of the serialized user profile.
pub const USER_DATA_KEY: &str = "userData";

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a JSON object of strings.
    #[error("corrupt session file {path}: {reason}")]
    Corrupt {
        /// File involved.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// A value could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No location could be determined for the session file.
    #[error("could not determine a configuration directory")]
    NoConfigDir,
}

impl From<StorageError> for RequestError {
    fn from(e: StorageError) -> Self {
        RequestError::new(
            ErrorKind::Storage,
            0,
            format!("Credential storage failed: {e}"),
            None,
        )
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value storage backing the credential store.
pub trait Storage: Send + Sync {
    /// Reads a value.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-process storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Storage persisted as a JSON object in a file.
///
/// Every operation reads the file, applies the change and writes it back
/// while holding a lock, so operations from one process never interleave.
/// A missing file reads as empty.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    /// Creates storage backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Default session file: `<config dir>/pitchhub/session.json`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoConfigDir`] if the platform has no
    /// configuration directory.
    pub fn default_path() -> StorageResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("pitchhub").join("session.json"))
            .ok_or(StorageError::NoConfigDir)
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StorageError::Corrupt {
                path: self.path.clone(),
                reason: "expected a JSON object".to_string(),
            }),
            Err(e) => Err(StorageError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            }),
        }
    }

    fn save(&self, entries: &Map<String, Value>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = ?self.path, "Saved session file");
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let _guard = self.lock.lock();
        let entries = self.load()?;
        Ok(entries.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.lock.lock();
        let mut entries = self.load()?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let _guard = self.lock.lock();
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

/// Holds the current session: at most one token and one profile.
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct CredentialStore {
    storage: Arc<dyn Storage>,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl CredentialStore {
    /// Creates a store over any backend.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Creates a store that forgets everything when dropped.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Creates a store persisted to `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStorage::new(path)))
    }

    /// Stores `token`, or removes the stored token when `token` is `None`
    /// or empty.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn set_auth_token(&self, token: Option<&str>) -> StorageResult<()> {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => self.storage.set(AUTH_TOKEN_KEY, token),
            None => self.storage.remove(AUTH_TOKEN_KEY),
        }
    }

    /// Returns the stored token, if any.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn auth_token(&self) -> StorageResult<Option<String>> {
        Ok(self
            .storage
            .get(AUTH_TOKEN_KEY)?
            .filter(|token| !token.is_empty()))
    }

    /// Stores `profile` as JSON, or removes it when `profile` is `None`.
    ///
    /// # Errors
    ///
    /// Propagates backend and serialization failures.
    pub fn set_user_data(&self, profile: Option<&UserProfile>) -> StorageResult<()> {
        match profile {
            Some(profile) => {
                let json = serde_json::to_string(profile)?;
                self.storage.set(USER_DATA_KEY, &json)
            }
            None => self.storage.remove(USER_DATA_KEY),
        }
    }

    /// Returns the stored profile.
    ///
    /// A stored value that no longer parses is reported as absent.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn user_data(&self) -> StorageResult<Option<UserProfile>> {
        let Some(raw) = self.storage.get(USER_DATA_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                tracing::warn!(error = %e, "Stored user profile is unreadable; ignoring it");
                Ok(None)
            }
        }
    }

    /// Removes both the token and the profile.
    ///
    /// # Errors
    ///
    /// Propagates backend failures. The profile removal is attempted even
    /// if removing the token fails.
    pub fn clear_auth_data(&self) -> StorageResult<()> {
        let token = self.storage.remove(AUTH_TOKEN_KEY);
        let profile = self.storage.remove(USER_DATA_KEY);
        token.and(profile)
    }

    /// Returns true if a non-empty token is stored.
    ///
    /// Backend failures are logged and reported as not authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        match self.auth_token() {
            Ok(token) => token.is_some(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read auth token");
                false
            }
        }
    }
}
