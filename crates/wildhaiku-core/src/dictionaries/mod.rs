//! Dictionaries for text analysis.
//!
//! Provides the pronunciation-backed syllable dictionary and the abbreviation
//! set used when splitting text into sentences.

pub mod abbreviations;
pub mod syllable_dict;

pub use syllable_dict::SyllableDictionary;
