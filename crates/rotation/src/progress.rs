//! Caller-owned player progress, injected through [`PlayerProgressStore`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProgressError;

/// A player's progress on one day's challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgress {
    /// Day index of the challenge.
    pub day_index: i64,
    /// Dataset the challenge is about.
    pub dataset_id: String,
    /// Guesses in the order they were made.
    #[serde(default)]
    pub guesses: Vec<String>,
    /// Whether the dataset has been guessed.
    #[serde(default)]
    pub solved: bool,
}

impl PlayerProgress {
    /// Creates empty progress for a day's challenge.
    pub fn new(day_index: i64, dataset_id: impl Into<String>) -> Self {
        Self {
            day_index,
            dataset_id: dataset_id.into(),
            guesses: Vec::new(),
            solved: false,
        }
    }

    /// Returns `true` if this progress belongs to the given challenge.
    pub fn is_for(&self, day_index: i64, dataset_id: &str) -> bool {
        self.day_index == day_index && self.dataset_id == dataset_id
    }

    /// Records a guess and returns whether it was correct.
    pub fn record_guess(&mut self, guess: impl Into<String>) -> bool {
        let guess = guess.into();
        let correct = guess == self.dataset_id;
        self.guesses.push(guess);
        self.solved |= correct;
        correct
    }
}

/// Storage for the current player's progress.
pub trait PlayerProgressStore {
    /// Returns the stored progress, if any.
    fn get(&self) -> Result<Option<PlayerProgress>, ProgressError>;

    /// Replaces the stored progress.
    fn set(&mut self, progress: &PlayerProgress) -> Result<(), ProgressError>;

    /// Removes any stored progress.
    fn clear(&mut self) -> Result<(), ProgressError>;
}

/// In-process store; nothing outlives the value.
#[derive(Debug, Default, Clone)]
pub struct MemoryProgressStore {
    progress: Option<PlayerProgress>,
}

impl MemoryProgressStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerProgressStore for MemoryProgressStore {
    fn get(&self) -> Result<Option<PlayerProgress>, ProgressError> {
        Ok(self.progress.clone())
    }

    fn set(&mut self, progress: &PlayerProgress) -> Result<(), ProgressError> {
        self.progress = Some(progress.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ProgressError> {
        self.progress = None;
        Ok(())
    }
}

/// Store backed by a JSON file. A missing file reads as no progress.
#[derive(Debug, Clone)]
pub struct FileProgressStore {
    path: PathBuf,
}

impl FileProgressStore {
    /// Creates a store at `path`. The file is not touched until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ProgressError {
        ProgressError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PlayerProgressStore for FileProgressStore {
    fn get(&self) -> Result<Option<PlayerProgress>, ProgressError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| ProgressError::Serialization {
                path: self.path.clone(),
                source,
            })
    }

    fn set(&mut self, progress: &PlayerProgress) -> Result<(), ProgressError> {
        let json = serde_json::to_string_pretty(progress).map_err(|source| {
            ProgressError::Serialization {
                path: self.path.clone(),
                source,
            }
        })?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }

    fn clear(&mut self) -> Result<(), ProgressError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// Returns the stored progress for today's challenge, or starts fresh.
///
/// Progress left over from a different day or dataset is cleared from the
/// store first. The fresh progress is not persisted until the caller sets it.
pub fn load_or_reset<S>(
    store: &mut S,
    day_index: i64,
    dataset_id: &str,
) -> Result<PlayerProgress, ProgressError>
where
    S: PlayerProgressStore + ?Sized,
{
    match store.get()? {
        Some(progress) if progress.is_for(day_index, dataset_id) => Ok(progress),
        Some(stale) => {
            debug!(
                stale_day = stale.day_index,
                day_index,
                "clearing progress from a previous challenge"
            );
            store.clear()?;
            Ok(PlayerProgress::new(day_index, dataset_id))
        }
        None => Ok(PlayerProgress::new(day_index, dataset_id)),
    }
}
