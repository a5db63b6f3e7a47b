//! Particular words: known weak passwords and fragments.
//!
//! The built-in list is always present. Extra words can be loaded from a file
//! with one word per line.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Built-in weak words, checked in this order.
pub const BUILTIN_WORDS: [&str; 25] = [
    "password", "password1", "123456", "1234567", "12345678", "123123", "abc123", "qwerty",
    "monkey", "letmein", "dragon", "111111", "baseball", "iloveyou", "trustno1", "sunshine",
    "master", "welcome", "shadow", "ashley", "football", "jesus", "michael", "ninja", "mustang",
];

static BUILTIN: LazyLock<ParticularWords> = LazyLock::new(|| ParticularWords {
    words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
});

#[derive(Error, Debug)]
pub enum ParticularWordsError {
    #[error("Particular words file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read particular words file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Particular words file is empty")]
    EmptyFile,
}

/// Returns the extra words file path.
///
/// Priority:
/// 1. Environment variable `PWD_PARTICULAR_WORDS_PATH`
/// 2. Default path `./assets/particular_words.txt`
pub fn get_particular_words_path() -> PathBuf {
    std::env::var("PWD_PARTICULAR_WORDS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/particular_words.txt"))
}

/// An immutable, lower-cased list of forbidden substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticularWords {
    words: Vec<String>,
}

impl ParticularWords {
    /// The shared built-in list.
    pub fn builtin() -> &'static ParticularWords {
        &BUILTIN
    }

    /// Built-in words followed by the words of the file at `path`.
    ///
    /// Lines are trimmed and lower-cased; blank lines and words already
    /// present are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no words
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParticularWordsError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Particular words loading FAILED: FileNotFound {:?}", path);
            return Err(ParticularWordsError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Particular words loading FAILED: Empty file {:?}", path);
            return Err(ParticularWordsError::EmptyFile);
        }

        let mut words = BUILTIN.words.clone();
        for line in content.lines() {
            let word = line.trim().to_lowercase();
            if !word.is_empty() && !words.contains(&word) {
                words.push(word);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Particular words loaded: {} extra words from {:?}",
            words.len() - BUILTIN_WORDS.len(),
            path
        );

        Ok(Self { words })
    }

    /// Like [`ParticularWords::from_path`], with the path from
    /// [`get_particular_words_path`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// unsafe { std::env::set_var("PWD_PARTICULAR_WORDS_PATH", "/etc/myapp/words.txt"); }
    /// let words = password_rules::ParticularWords::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, ParticularWordsError> {
        Self::from_path(get_particular_words_path())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the first word contained in `lowered`, if any.
    ///
    /// `lowered` must already be lower-case.
    pub fn find_in(&self, lowered: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|word| lowered.contains(word.as_str()))
            .map(String::as_str)
    }
}

impl Default for ParticularWords {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
