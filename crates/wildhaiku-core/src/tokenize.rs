//! Tokenizer adapter.
//!
//! The detector only needs two capabilities from a tokenizer: splitting a
//! paragraph into sentence strings, and splitting a sentence into tagged
//! tokens. Both must be deterministic for identical input.

use crate::error::TokenizeError;
use crate::text;
use crate::token::Token;

/// Sentence and word segmentation used by the detector.
pub trait Tokenizer: Send + Sync {
    /// Split a paragraph into sentence strings, in order.
    fn sentences(&self, text: &str) -> Result<Vec<String>, TokenizeError>;

    /// Split one sentence into tokens, in order.
    fn tokens(&self, sentence: &str) -> Result<Vec<Token>, TokenizeError>;
}

/// Rule-based tokenizer tuned for tweets.
///
/// Sentences come from [`text::split_sentences`] and tokens from
/// [`text::split_tokens`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTokenizer;

impl Tokenizer for RuleTokenizer {
    fn sentences(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        Ok(text::split_sentences(text))
    }

    fn tokens(&self, sentence: &str) -> Result<Vec<Token>, TokenizeError> {
        Ok(text::split_tokens(sentence))
    }
}
