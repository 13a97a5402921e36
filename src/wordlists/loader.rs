//! Word pool loading utilities
//!
//! A word list file holds one candidate secret per line. Blank lines are
//! skipped and surrounding whitespace is trimmed.

use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for word pool construction
#[derive(Debug)]
pub enum WordPoolError {
    /// The word list file could not be read
    Io { path: PathBuf, source: io::Error },
    /// No usable words were found
    Empty,
}

impl fmt::Display for WordPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Empty => write!(f, "Word pool is empty"),
        }
    }
}

impl std::error::Error for WordPoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// Immutable, ordered collection of candidate secret words
///
/// Never empty. Duplicate entries are kept once, at their first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Build a pool from an iterator of words
    ///
    /// # Errors
    ///
    /// Returns `WordPoolError::Empty` if no non-blank words remain.
    ///
    /// # Examples
    /// ```
    /// use semantic_hunter::wordlists::WordPool;
    ///
    /// let pool = WordPool::from_words(["苹果", " 香蕉 ", "", "苹果"]).unwrap();
    /// assert_eq!(pool.words(), ["苹果", "香蕉"]);
    ///
    /// assert!(WordPool::from_words(["  "]).is_err());
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self, WordPoolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let words: Vec<String> = words
            .into_iter()
            .filter_map(|word| {
                let trimmed = word.as_ref().trim();
                if trimmed.is_empty() || !seen.insert(trimmed.to_string()) {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect();

        if words.is_empty() {
            return Err(WordPoolError::Empty);
        }
        Ok(Self { words })
    }

    /// Parse a newline-delimited word list
    ///
    /// # Errors
    ///
    /// Returns `WordPoolError::Empty` if the text holds no words.
    pub fn from_text(text: &str) -> Result<Self, WordPoolError> {
        Self::from_words(text.lines())
    }

    /// Load a newline-delimited word list from a file
    ///
    /// # Errors
    ///
    /// Returns `WordPoolError::Io` if the file cannot be read, or
    /// `WordPoolError::Empty` if it holds no words.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordPoolError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| WordPoolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&content)
    }

    /// All words, in file order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the pool
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is one of the candidates
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
