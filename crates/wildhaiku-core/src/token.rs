//! Tokens and the word/punctuation classifier.

use serde::Serialize;

/// Coarse class assigned by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenTag {
    /// Something that should be scored against the dictionary.
    Word,
    /// A punctuation mark or symbol split off on its own.
    Punct,
}

/// One lexical unit of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// Original text of the token.
    pub text: String,
    /// Class assigned by the tokenizer.
    pub tag: TokenTag,
    /// Position of the token within its sentence.
    pub index: usize,
}

impl Token {
    /// Create a token.
    pub fn new(text: impl Into<String>, tag: TokenTag, index: usize) -> Self {
        Self {
            text: text.into(),
            tag,
            index,
        }
    }

    /// Create a word token.
    pub fn word(text: impl Into<String>, index: usize) -> Self {
        Self::new(text, TokenTag::Word, index)
    }

    /// Create a punctuation token.
    pub fn punct(text: impl Into<String>, index: usize) -> Self {
        Self::new(text, TokenTag::Punct, index)
    }
}

/// Whether the token is a lone punctuation mark or symbol.
///
/// Only single-character tokens qualify. Contractions such as `don't` keep
/// their apostrophe because the tokenizer never splits them.
pub fn is_symbol_or_punct(token: &Token) -> bool {
    let mut chars = token.text.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return false;
    };
    token.tag == TokenTag::Punct || is_symbol_or_punct_char(c)
}

/// Whether `c` is a punctuation or symbol code point.
///
/// Anything that is not a letter, digit, space, or control character: this
/// covers the Unicode punctuation and symbol categories, emoji included.
pub fn is_symbol_or_punct_char(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !c.is_control()
}
