//! High-score persistence.
//!
//! The best score lives in a tiny plain-text file (a single decimal
//! number). A missing or unreadable file means no recorded best yet, so
//! loading never fails; saving reports errors because silently losing a
//! new best would be worse.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable overriding the high-score file location.
pub const HIGH_SCORE_ENV: &str = "SNAKE_HIGH_SCORE_FILE";

const DEFAULT_FILE_NAME: &str = ".tui-snake_high_score";

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the store location: `SNAKE_HIGH_SCORE_FILE` wins, then a
    /// dotfile in the home directory, then the current directory.
    pub fn from_env() -> Self {
        if let Ok(path) = env::var(HIGH_SCORE_ENV) {
            return Self::new(path);
        }
        let dir = env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
        Self::new(dir.join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored best score, treating any failure as 0.
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Persist the best score as a decimal string.
    pub fn save(&self, best: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(&self.path, best.to_string())
            .with_context(|| format!("writing high score to {}", self.path.display()))
    }
}
