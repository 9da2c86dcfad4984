//! Durable key-value storage capability and its adapters.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// String key-value store the quiz collection persists into.
///
/// Implementations own durability only; serialization is the caller's
/// concern. Writes replace the previous value wholesale (last write wins).
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// Volatile in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// File-backed store keeping all keys in one JSON object on disk.
///
/// The file is read once at open and rewritten on every `set`. I/O and
/// parse failures are logged and treated as an empty store; they never
/// propagate.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`, loading any existing content. A missing,
    /// unreadable, or malformed file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    log::warn!("ignoring malformed store file {}: {}", path.display(), err);
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                log::warn!("failed to read store file {}: {}", path.display(), err);
                HashMap::new()
            }
        };

        Self { path, entries }
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("failed to serialize store file {}: {}", self.path.display(), err);
                return;
            }
        };

        if let Err(err) = fs::write(&self.path, json) {
            log::warn!("failed to write store file {}: {}", self.path.display(), err);
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("quizzes"), None);

        store.set("quizzes", "[]");
        assert_eq!(store.get("quizzes"), Some("[]".to_string()));

        store.set("quizzes", "[1]");
        assert_eq!(store.get("quizzes"), Some("[1]".to_string()));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = FileStore::open(&path);
            assert_eq!(store.get("quizzes"), None);
            store.set("quizzes", "[\"a\"]");
        }

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("quizzes"), Some("[\"a\"]".to_string()));
    }

    #[test]
    fn test_file_store_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("absent.json"));
        assert_eq!(store.get("quizzes"), None);
    }

    #[test]
    fn test_file_store_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json at all {").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("quizzes"), None);
    }
}
