use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::model::ScoreRecord;

#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("score file i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("score file is not a valid record: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Rejected,
}

/// The single best-of-all-time record, kept as one JSON file.
///
/// Reading and then rewriting the file is not synchronized; only one game
/// process is expected to use a given path at a time.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when no file exists yet.
    pub fn try_load(&self) -> Result<Option<ScoreRecord>, ScoreStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Unreadable or corrupt files count as no record.
    pub fn load(&self) -> Option<ScoreRecord> {
        match self.try_load() {
            Ok(record) => record,
            Err(err) => {
                warn!(
                    target: "score_store",
                    "Ignoring best score at {}: {}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }

    /// Overwrites the record only if `candidate` beats it.
    pub fn save(&self, candidate: &ScoreRecord) -> Result<SaveOutcome, ScoreStoreError> {
        if let Some(existing) = self.load() {
            if !candidate.beats(&existing) {
                info!(
                    target: "score_store",
                    "Keeping {:?}, {:?} does not beat it", existing, candidate
                );
                return Ok(SaveOutcome::Rejected);
            }
        }

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let contents = serde_json::to_string_pretty(candidate)?;
        fs::write(&self.path, contents)?;
        info!(target: "score_store", "Saved new best {:?}", candidate);
        Ok(SaveOutcome::Saved)
    }
}
