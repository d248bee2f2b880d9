//! Paragraphs and the sentence-offset haiku search.

use std::collections::HashSet;

use serde::Serialize;

use crate::haiku::Haiku;
use crate::sentence::Sentence;

/// Ordered sentences from one input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    sentences: Vec<Sentence>,
}

impl Paragraph {
    /// Wrap already-built sentences.
    pub const fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Append a sentence.
    pub fn push(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    /// The sentences, in order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Sum of syllables across all sentences.
    pub fn total_syllables(&self) -> usize {
        self.sentences.iter().map(Sentence::total_syllables).sum()
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the paragraph has no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Concatenate sentences `start..` into one sentence.
    pub fn combined_from(&self, start: usize) -> Sentence {
        let mut combined = Sentence::default();
        for sentence in self.sentences.iter().skip(start) {
            combined.extend(sentence);
        }
        combined
    }

    /// Find every distinct haiku anchored at a sentence start.
    ///
    /// Each sentence index opens a window running to the end of the
    /// paragraph. Results keep discovery order; a haiku that renders the same
    /// as an earlier one is skipped.
    pub fn find_haikus(&self, line_sizes: &[usize]) -> Vec<Haiku> {
        let mut seen = HashSet::new();
        let mut haikus = Vec::new();
        for start in 0..self.sentences.len() {
            let Some(haiku) = self.combined_from(start).subdivide(line_sizes) else {
                continue;
            };
            if seen.insert(haiku.render()) {
                haikus.push(haiku);
            }
        }
        haikus
    }
}
