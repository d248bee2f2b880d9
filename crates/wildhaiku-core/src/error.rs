//! Error types for wildhaiku-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A setting parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading the pronunciation dictionary.
///
/// Both variants are fatal: the dictionary is loaded once at startup and the
/// detector cannot run without it.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be read.
    #[error("failed to read syllable dictionary {path}")]
    Io {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of the dictionary could not be parsed.
    #[error("malformed syllable dictionary {path} at line {line}: {reason}")]
    Parse {
        /// Dictionary file that was being parsed.
        path: Utf8PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

/// Result type alias using [`DictionaryError`].
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Errors produced by a [`Tokenizer`](crate::tokenize::Tokenizer).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// The tokenizer rejected the input.
    #[error("malformed input: {0}")]
    Malformed(String),
}

/// Errors raised while turning one sentence into scored words.
///
/// These are recovered by the paragraph builder and never reach callers of
/// [`HaikuDetector::find_haikus_in_text`](crate::detector::HaikuDetector::find_haikus_in_text).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SentenceError {
    /// A word inside the sentence has no dictionary entry.
    #[error("no syllable count for {word:?}")]
    UnscorableWord {
        /// The word as it appeared in the text.
        word: String,
    },

    /// The sentence could not be tokenized.
    #[error("tokenization failed: {0}")]
    Tokenization(#[from] TokenizeError),
}

/// Result type alias using [`SentenceError`].
pub type SentenceResult<T> = Result<T, SentenceError>;

/// Errors raised while writing found haikus to disk.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Creating, linking, or writing an archive file failed.
    #[error("archive I/O failed for {path}")]
    Io {
        /// Path involved in the failed operation.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output record could not be encoded as JSON.
    #[error("failed to encode archive record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias using [`ArchiveError`].
pub type ArchiveResult<T> = Result<T, ArchiveError>;
