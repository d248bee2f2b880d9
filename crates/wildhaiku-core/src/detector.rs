//! Haiku detection over free text.
//!
//! [`HaikuDetector`] owns a shared, read-only [`SyllableDictionary`] and a
//! [`Tokenizer`]. It turns raw text into a [`Paragraph`] of scored sentences
//! and searches that paragraph for haikus. A detector can be cloned cheaply
//! and used from many threads at once.

use std::sync::Arc;

use serde::Serialize;

use crate::DEFAULT_LINE_SIZES;
use crate::dictionaries::SyllableDictionary;
use crate::error::SentenceResult;
use crate::filter::{TokenFilter, TrimLeadingUnknown, TrimTrailingUnknown, apply_filters};
use crate::haiku::{Haiku, form_syllables};
use crate::paragraph::Paragraph;
use crate::sentence::{Sentence, score_tokens};
use crate::tokenize::{RuleTokenizer, Tokenizer};

/// Finds haikus in text.
#[derive(Debug, Clone)]
pub struct HaikuDetector<T = RuleTokenizer> {
    dictionary: Arc<SyllableDictionary>,
    tokenizer: T,
    line_sizes: Vec<usize>,
}

/// Result of running the detector over one text.
#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    /// Syllables in the usable part of the text.
    pub syllables: usize,
    /// Sentences that made it into the paragraph.
    pub sentences: usize,
    /// Distinct haikus, in discovery order.
    pub haikus: Vec<Haiku>,
}

impl HaikuDetector<RuleTokenizer> {
    /// Create a 5-7-5 detector using the rule-based tokenizer.
    pub fn new(dictionary: Arc<SyllableDictionary>) -> Self {
        Self::with_tokenizer(dictionary, RuleTokenizer)
    }
}

impl<T: Tokenizer> HaikuDetector<T> {
    /// Create a 5-7-5 detector using a custom tokenizer.
    pub fn with_tokenizer(dictionary: Arc<SyllableDictionary>, tokenizer: T) -> Self {
        Self {
            dictionary,
            tokenizer,
            line_sizes: DEFAULT_LINE_SIZES.to_vec(),
        }
    }

    /// Replace the target syllable count of each line.
    #[must_use]
    pub fn with_line_sizes(mut self, line_sizes: Vec<usize>) -> Self {
        self.line_sizes = line_sizes;
        self
    }

    /// The shared dictionary.
    pub fn dictionary(&self) -> &SyllableDictionary {
        &self.dictionary
    }

    /// Target syllable count of each line.
    pub fn line_sizes(&self) -> &[usize] {
        &self.line_sizes
    }

    /// Fewest syllables a paragraph needs to hold a haiku.
    ///
    /// Saturates for forms too large to sum.
    pub fn threshold(&self) -> usize {
        form_syllables(&self.line_sizes).unwrap_or(usize::MAX)
    }

    /// Tokenize, filter, and score one sentence.
    pub fn build_sentence(
        &self,
        text: &str,
        filters: &[&dyn TokenFilter],
    ) -> SentenceResult<Sentence> {
        let tokens = self.tokenizer.tokens(text)?;
        score_tokens(&self.dictionary, apply_filters(&tokens, filters))
    }

    /// Build a paragraph from raw text.
    ///
    /// HTML entities are decoded first. Unknown tokens are trimmed from the
    /// start of the first sentence and the end of the last one; a sentence
    /// trimmed to nothing is left out. When a
    /// sentence cannot be built, the sentences before it are kept if they
    /// already hold enough syllables for a haiku; otherwise the paragraph
    /// comes back empty.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn build_paragraph(&self, text: &str) -> Paragraph {
        let text = html_escape::decode_html_entities(text);
        let sentences = match self.tokenizer.sentences(&text) {
            Ok(sentences) => sentences,
            Err(err) => {
                tracing::debug!(error = %err, "sentence split failed, paragraph unusable");
                return Paragraph::default();
            }
        };

        let leading = TrimLeadingUnknown::new(&self.dictionary);
        let trailing = TrimTrailingUnknown::new(&self.dictionary);
        let last = sentences.len().saturating_sub(1);
        let mut paragraph = Paragraph::default();

        for (index, sentence) in sentences.iter().enumerate() {
            let mut filters: Vec<&dyn TokenFilter> = Vec::with_capacity(2);
            if index == 0 {
                filters.push(&leading);
            }
            if index == last {
                filters.push(&trailing);
            }

            match self.build_sentence(sentence, &filters) {
                Ok(built) if built.is_empty() => {}
                Ok(built) => paragraph.push(built),
                Err(err) => {
                    let syllables = paragraph.total_syllables();
                    if syllables >= self.threshold() {
                        tracing::debug!(
                            error = %err,
                            index,
                            syllables,
                            "truncating paragraph at unusable sentence"
                        );
                        return paragraph;
                    }
                    tracing::debug!(
                        error = %err,
                        index,
                        syllables,
                        "discarding paragraph"
                    );
                    return Paragraph::default();
                }
            }
        }

        paragraph
    }

    /// Find every distinct haiku in `text`.
    pub fn find_haikus_in_text(&self, text: &str) -> Vec<Haiku> {
        self.build_paragraph(text).find_haikus(&self.line_sizes)
    }

    /// Find haikus and report how much of the text was usable.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn detect(&self, text: &str) -> Detection {
        let paragraph = self.build_paragraph(text);
        let haikus = paragraph.find_haikus(&self.line_sizes);
        tracing::debug!(
            sentences = paragraph.len(),
            haikus = haikus.len(),
            "detection complete"
        );
        Detection {
            syllables: paragraph.total_syllables(),
            sentences: paragraph.len(),
            haikus,
        }
    }
}
