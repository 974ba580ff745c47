//! High score persistence
//!
//! A single scalar best score. Read once when a session is created, written
//! every time a run beats it. Storage failures are reported, never fatal.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Key-value store for the best score
pub trait HighScoreStore {
    /// Stored best score, 0 when nothing is stored or the record is unreadable
    fn read(&self) -> u64;
    fn write(&mut self, score: u64) -> Result<()>;
}

/// On-disk/LocalStorage record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub score: u64,
}

impl HighScoreRecord {
    /// Parse a stored record, accepting a bare number as well
    pub fn parse(raw: &str) -> Option<Self> {
        if let Ok(record) = serde_json::from_str::<Self>(raw) {
            return Some(record);
        }
        raw.trim().parse::<u64>().ok().map(|score| Self { score })
    }
}

/// Volatile store (tests, hosts without storage)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub score: u64,
    /// Number of successful writes
    pub writes: usize,
}

impl MemoryStore {
    pub fn new(score: u64) -> Self {
        Self { score, writes: 0 }
    }
}

impl HighScoreStore for MemoryStore {
    fn read(&self) -> u64 {
        self.score
    }

    fn write(&mut self, score: u64) -> Result<()> {
        self.score = score;
        self.writes += 1;
        Ok(())
    }
}

/// JSON file store (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HighScoreStore for JsonFileStore {
    fn read(&self) -> u64 {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => match HighScoreRecord::parse(&raw) {
                Some(record) => {
                    log::info!("Loaded high score {}", record.score);
                    record.score
                }
                None => {
                    log::warn!("Ignoring unreadable high score at {}", self.path.display());
                    0
                }
            },
            Err(_) => {
                log::info!("No high score found, starting fresh");
                0
            }
        }
    }

    fn write(&mut self, score: u64) -> Result<()> {
        let json = serde_json::to_string(&HighScoreRecord { score })?;
        // Write to a temp file first so a crash never leaves a torn record
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Browser LocalStorage store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "catcher_high_score";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn read(&self) -> u64 {
        let raw = Self::storage()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok())
            .flatten();
        match raw.as_deref().and_then(HighScoreRecord::parse) {
            Some(record) => {
                log::info!("Loaded high score {}", record.score);
                record.score
            }
            None => {
                log::info!("No high score found, starting fresh");
                0
            }
        }
    }

    fn write(&mut self, score: u64) -> Result<()> {
        let storage = Self::storage().ok_or(crate::Error::StorageUnavailable)?;
        let json = serde_json::to_string(&HighScoreRecord { score })?;
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|_| crate::Error::StorageUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new(40);
        assert_eq!(store.read(), 40);
        store.write(90).unwrap();
        assert_eq!(store.read(), 90);
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_record_parse() {
        assert_eq!(
            HighScoreRecord::parse(r#"{"score":120}"#),
            Some(HighScoreRecord { score: 120 })
        );
        assert_eq!(
            HighScoreRecord::parse(" 75\n"),
            Some(HighScoreRecord { score: 75 })
        );
        assert_eq!(HighScoreRecord::parse("garbage"), None);
        assert_eq!(HighScoreRecord::parse("-5"), None);
    }

    #[test]
    fn test_json_file_store_round_trip() {
        let name = format!("catcher-hs-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        let _ = std::fs::remove_file(&path);
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.read(), 0);
        store.write(321).unwrap();
        assert_eq!(JsonFileStore::new(&path).read(), 321);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_json_file_store_write_failure_is_error() {
        let mut store = JsonFileStore::new("/nonexistent-dir/catcher/high_score.json");
        assert!(store.write(10).is_err());
    }
}
