//! The store of allowed words
//!
//! Guesses must be members of the store and targets are drawn from it.
//! The default list is embedded in the binary; a custom list can be loaded
//! from a file with one word per line.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use log::info;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The word list could not be used; fatal at startup
#[derive(Debug)]
pub enum WordStoreError {
    Unreadable { path: PathBuf, source: io::Error },
    Empty,
}

impl fmt::Display for WordStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "cannot read word list {}: {source}", path.display())
            }
            Self::Empty => write!(f, "word list contains no valid five-letter words"),
        }
    }
}

impl std::error::Error for WordStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// A non-empty, de-duplicated list of words
#[derive(Debug, Clone)]
pub struct WordStore {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordStore {
    /// Build a store, dropping duplicates but keeping first-seen order
    ///
    /// # Errors
    /// `WordStoreError::Empty` if no words are given.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, WordStoreError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(WordStoreError::Empty);
        }

        Ok(Self { words, index })
    }

    /// Build a store from plain strings, skipping invalid entries
    ///
    /// # Errors
    /// `WordStoreError::Empty` if none of the strings is a valid word.
    pub fn from_words<'s>(words: impl IntoIterator<Item = &'s str>) -> Result<Self, WordStoreError> {
        Self::new(words.into_iter().filter_map(|w| Word::new(w).ok()))
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    /// `WordStoreError::Empty` if the build embedded an empty list.
    pub fn embedded() -> Result<Self, WordStoreError> {
        let store = Self::new(loader::words_from_slice(ANSWERS))?;
        info!("loaded {} embedded words", store.len());
        Ok(store)
    }

    /// Load a list from disk
    ///
    /// # Errors
    /// `Unreadable` if the file can't be read, `Empty` if it holds no words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordStoreError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| WordStoreError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::new(words)?;
        info!("loaded {} words from {}", store.len(), path.display());
        Ok(store)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Pick a word uniformly at random
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an empty store can't be built
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
