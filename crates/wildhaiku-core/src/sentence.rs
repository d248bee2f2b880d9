//! Scored sentences and greedy line subdivision.

use serde::Serialize;

use crate::dictionaries::SyllableDictionary;
use crate::error::{SentenceError, SentenceResult};
use crate::haiku::{Haiku, form_syllables};
use crate::token::{Token, is_symbol_or_punct};

/// A token paired with its syllable count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredWord {
    /// The token as produced by the tokenizer.
    pub token: Token,
    /// Syllables contributed by the token; zero for punctuation.
    pub syllables: usize,
}

/// An ordered run of scored words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sentence {
    words: Vec<ScoredWord>,
}

impl Sentence {
    /// Wrap already-scored words.
    pub const fn new(words: Vec<ScoredWord>) -> Self {
        Self { words }
    }

    /// The scored words, in order.
    pub fn words(&self) -> &[ScoredWord] {
        &self.words
    }

    /// Sum of syllables across all words.
    pub fn total_syllables(&self) -> usize {
        self.words.iter().map(|w| w.syllables).sum()
    }

    /// Number of scored words, punctuation included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the sentence has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub(crate) fn extend(&mut self, other: &Self) {
        self.words.extend(other.words.iter().cloned());
    }

    /// Split the sentence into lines hitting `line_sizes` exactly.
    ///
    /// The walk is greedy and never backtracks. A line closes only when it has
    /// reached its size and the next word carries syllables, so punctuation
    /// always lands on the line that is open when it appears. A word that
    /// would push the open line past its size fails the whole fit. Words left
    /// over once every line is filled are ignored. A form too large to sum
    /// never fits.
    pub fn subdivide(&self, line_sizes: &[usize]) -> Option<Haiku> {
        let needed = form_syllables(line_sizes)?;
        if line_sizes.is_empty() || self.total_syllables() < needed {
            return None;
        }

        let mut words = self.words.iter().peekable();
        let mut lines = Vec::with_capacity(line_sizes.len());

        for &size in line_sizes {
            let mut line = Vec::new();
            let mut count = 0;
            while let Some(word) = words.next_if(|w| count + w.syllables <= size) {
                count += word.syllables;
                line.push(word.token.clone());
            }
            if count != size {
                return None;
            }
            lines.push(line);
        }

        Some(Haiku::new(lines))
    }
}

/// Score `tokens` against the dictionary.
///
/// Punctuation scores zero. Any other token without an entry fails the whole
/// sentence.
pub fn score_tokens(dictionary: &SyllableDictionary, tokens: &[Token]) -> SentenceResult<Sentence> {
    let words = tokens
        .iter()
        .map(|token| {
            let syllables = if is_symbol_or_punct(token) {
                0
            } else {
                dictionary
                    .lookup(&token.text)
                    .ok_or_else(|| SentenceError::UnscorableWord {
                        word: token.text.clone(),
                    })?
            };
            Ok(ScoredWord {
                token: token.clone(),
                syllables,
            })
        })
        .collect::<SentenceResult<Vec<_>>>()?;
    Ok(Sentence::new(words))
}
