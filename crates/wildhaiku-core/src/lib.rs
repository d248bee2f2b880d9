//! Core library for wildhaiku.
//!
//! Finds accidental 5-7-5 haikus in short, noisy text such as tweets. Words
//! are scored against a CMU-style pronouncing dictionary, tokens the
//! dictionary cannot score are trimmed from the edges of a paragraph, and
//! each sentence start is tried as the opening of a haiku.
//!
//! # Modules
//!
//! - [`detector`] - Paragraph building and haiku search over raw text
//! - [`dictionaries`] - Syllable dictionary and abbreviation list
//! - [`sentence`] / [`paragraph`] - Scored text and greedy line subdivision
//! - [`haiku`] - Found haikus and their rendering
//! - [`tokenize`] / [`text`] / [`token`] / [`filter`] - Tokenization and edge trimming
//! - [`tweet`] / [`processor`] / [`output`] - Tweet processing and archiving
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use camino::Utf8Path;
//! use wildhaiku_core::{HaikuDetector, SyllableDictionary};
//!
//! let dictionary = SyllableDictionary::load(Utf8Path::new("cmudict.dict"))
//!     .expect("Failed to load dictionary");
//! let detector = HaikuDetector::new(Arc::new(dictionary));
//!
//! for haiku in detector.find_haikus_in_text("an old silent pond. a frog jumps into the pond, splash! silence again.") {
//!     println!("{haiku}\n");
//! }
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod detector;
pub mod dictionaries;
pub mod error;
pub mod filter;
pub mod haiku;
pub mod output;
pub mod paragraph;
pub mod processor;
pub mod sentence;
pub mod text;
pub mod token;
pub mod tokenize;
pub mod tweet;

#[cfg(test)]
mod test_support;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Syllables per line of a classic haiku.
pub const DEFAULT_LINE_SIZES: [usize; 3] = [5, 7, 5];

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use detector::{Detection, HaikuDetector};
pub use dictionaries::SyllableDictionary;
pub use error::{
    ArchiveError, ArchiveResult, ConfigError, ConfigResult, DictionaryError, DictionaryResult,
    SentenceError, SentenceResult, TokenizeError,
};
pub use haiku::Haiku;
pub use output::{DiskArchiver, SuffixBlacklist};
pub use paragraph::Paragraph;
pub use processor::{HaikuOutput, Processor};
pub use sentence::{ScoredWord, Sentence};
pub use token::{Token, TokenTag};
pub use tokenize::{RuleTokenizer, Tokenizer};
pub use tweet::Tweet;
