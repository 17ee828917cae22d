//! Word supply from a newline-delimited file
//!
//! The list is re-read on every call so edits take effect between sessions.
//! Selection uses [`rand::rng`] by default, a CSPRNG seeded from the OS, so
//! the next word cannot be predicted from earlier ones.

use super::{SupplyError, WordSource};
use rand::prelude::IndexedRandom;
use rand::{Rng, rngs::ThreadRng};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the bundled word list
pub const DEFAULT_WORD_LIST: &str = "data/words.txt";

/// Picks one entry uniformly at random from a word-list file
pub struct LocalListSource<R: Rng = ThreadRng> {
    path: PathBuf,
    rng: R,
}

impl LocalListSource<ThreadRng> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_rng(path, rand::rng())
    }
}

impl<R: Rng> LocalListSource<R> {
    /// Use an explicit random source, e.g. a seeded generator in tests
    pub fn with_rng(path: impl Into<PathBuf>, rng: R) -> Self {
        Self {
            path: path.into(),
            rng,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read the usable entries of a word list
///
/// Lines are trimmed and blank lines are skipped.
///
/// # Errors
///
/// Returns `EmptySource` if the file is missing, `Unreadable` for any other
/// I/O failure.
pub fn load_words(path: &Path) -> Result<Vec<String>, SupplyError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            SupplyError::EmptySource {
                path: path.to_path_buf(),
            }
        } else {
            SupplyError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

impl<R: Rng> WordSource for LocalListSource<R> {
    fn produce_word(&mut self) -> Result<String, SupplyError> {
        let words = load_words(&self.path)?;

        let word = words
            .choose(&mut self.rng)
            .ok_or_else(|| SupplyError::EmptySource {
                path: self.path.clone(),
            })?;

        debug!(%word, "picked word from list");
        Ok(word.clone())
    }
}
