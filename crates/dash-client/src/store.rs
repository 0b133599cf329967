// File: crates/dash-client/src/store.rs
// Summary: Session token persistence: a file-backed JSON key-value store and an in-memory store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::error::StoreError;

/// Key the session token is stored under.
pub const TOKEN_KEY: &str = "JWT";

pub trait TokenStore: Send + Sync {
    fn get(&self) -> Result<Option<String>, StoreError>;
    fn set(&self, token: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// JSON object on disk, e.g. `{"JWT": "<token>"}`. Other keys are preserved.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path { &self.path }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.remove(TOKEN_KEY).filter(|t| !t.is_empty()))
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(TOKEN_KEY.to_string(), token.to_string());
        self.write_map(&map)?;
        debug!(path = %self.path.display(), "session token stored");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        if map.remove(TOKEN_KEY).is_some() {
            self.write_map(&map)?;
            debug!(path = %self.path.display(), "session token cleared");
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self { Self::default() }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<String>, StoreError> { Ok(self.slot().clone()) }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let s = MemoryTokenStore::new();
        assert_eq!(s.get().unwrap(), None);
        s.set("abc").unwrap();
        assert_eq!(s.get().unwrap().as_deref(), Some("abc"));
        s.clear().unwrap();
        assert_eq!(s.get().unwrap(), None);
    }
}
