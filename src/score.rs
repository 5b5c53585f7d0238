//! High Score Persistence
//!
//! The record is a single decimal number in a plain text file, read at
//! startup and overwritten whenever a run beats it. Loading is
//! infallible: a missing or garbled file reads as zero. The store is a
//! trait so the game logic never touches the filesystem directly.

use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default record file, relative to the working directory
pub const HIGH_SCORE_FILE: &str = "highscore.txt";

/// Store error types
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Permission denied
    PermissionDenied(String),
    /// I/O error
    IoError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::PermissionDenied(msg) => write!(f, "permission denied: {}", msg),
            StoreError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::PermissionDenied => StoreError::PermissionDenied(e.to_string()),
            _ => StoreError::IoError(e.to_string()),
        }
    }
}

/// Where the high score lives between runs
pub trait HighScoreStore {
    /// Read the stored record. Any failure reads as 0; never errors.
    fn load(&self) -> u32;

    /// Overwrite the stored record with a new value
    fn save(&mut self, value: u32) -> Result<(), StoreError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// File-backed store
// ─────────────────────────────────────────────────────────────────────────────

/// Plain text file store: the whole file is one decimal number
#[derive(Debug, Clone)]
pub struct FileHighScores {
    path: PathBuf,
}

impl FileHighScores {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScores {
    fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save(&mut self, value: u32) -> Result<(), StoreError> {
        fs::write(&self.path, value.to_string())?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory store
// ─────────────────────────────────────────────────────────────────────────────

/// Volatile store for tests and for targets without a filesystem
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScores {
    value: u32,
}

#[allow(dead_code)]
impl MemoryHighScores {
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl HighScoreStore for MemoryHighScores {
    fn load(&self) -> u32 {
        self.value
    }

    fn save(&mut self, value: u32) -> Result<(), StoreError> {
        self.value = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, FileHighScores) {
        let dir = TempDir::new().unwrap();
        let store = FileHighScores::new(dir.path().join(HIGH_SCORE_FILE));
        (dir, store)
    }

    #[test]
    fn test_load_valid_file() {
        let (dir, store) = setup_store();
        fs::write(dir.path().join(HIGH_SCORE_FILE), "42").unwrap();
        assert_eq!(store.load(), 42);
    }

    #[test]
    fn test_load_tolerates_surrounding_whitespace() {
        let (dir, store) = setup_store();
        fs::write(dir.path().join(HIGH_SCORE_FILE), "42\n").unwrap();
        assert_eq!(store.load(), 42);
    }

    #[test]
    fn test_load_missing_file_reads_zero() {
        let (_dir, store) = setup_store();
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_load_garbage_reads_zero() {
        let (dir, store) = setup_store();
        fs::write(dir.path().join(HIGH_SCORE_FILE), "abc").unwrap();
        assert_eq!(store.load(), 0);

        fs::write(dir.path().join(HIGH_SCORE_FILE), "-5").unwrap();
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_writes_bare_decimal() {
        let (dir, mut store) = setup_store();
        store.save(50).unwrap();

        let raw = fs::read_to_string(dir.path().join(HIGH_SCORE_FILE)).unwrap();
        assert_eq!(raw, "50");
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let (dir, mut store) = setup_store();
        store.save(10).unwrap();
        store.save(120).unwrap();

        let raw = fs::read_to_string(dir.path().join(HIGH_SCORE_FILE)).unwrap();
        assert_eq!(raw, "120");
        assert_eq!(store.load(), 120);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryHighScores::new(7);
        assert_eq!(store.load(), 7);
        store.save(99).unwrap();
        assert_eq!(store.load(), 99);
    }
}
