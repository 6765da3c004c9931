//! High-score persistence.
//!
//! The store is a tiny key-value capability. A failing store never stops the
//! game: reads fall back to zero and writes are skipped, both with a warning.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Key the best score is filed under.
pub const HIGH_SCORE_KEY: &str = "highestScore";

pub trait ScoreStore {
    /// `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<u32>, StoreError>;
    fn set(&mut self, key: &str, value: u32) -> Result<(), StoreError>;
}

// ── File-backed store ─────────────────────────────────────────────────────────

/// A JSON object on disk, e.g. `{"highestScore": 42}`.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.space_defender_scores.json`, falling back to the working directory.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".space_defender_scores.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, u32>, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }
}

impl ScoreStore for FileScoreStore {
    fn get(&self, key: &str) -> Result<Option<u32>, StoreError> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn set(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StoreError::Corrupt { .. }) => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value);
        let json = serde_json::to_string(&entries).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

// ── In-memory store ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    entries: HashMap<String, u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, key: &str) -> Result<Option<u32>, StoreError> {
        Ok(self.entries.get(key).copied())
    }

    fn set(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

// ── Best-score tracker ────────────────────────────────────────────────────────

/// Tracks the best score and writes it through to a store on improvement.
#[derive(Debug)]
pub struct HighScore<S> {
    store: S,
    best: u32,
}

impl<S: ScoreStore> HighScore<S> {
    /// Read the stored best. An absent key or an unreadable store counts as zero.
    pub fn load(store: S) -> Self {
        let best = match store.get(HIGH_SCORE_KEY) {
            Ok(Some(best)) => {
                log::info!("Loaded high score {best}");
                best
            }
            Ok(None) => 0,
            Err(e) => {
                log::warn!("High score unavailable, starting from 0: {e}");
                0
            }
        };
        Self { store, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record `score`; persists only when it beats the current best.
    /// Returns true when the best improved.
    pub fn observe(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(e) = self.store.set(HIGH_SCORE_KEY, score) {
            log::warn!("Could not save high score {score}: {e}");
        }
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
