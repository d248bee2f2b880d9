//! Edge-trimming token filters.
//!
//! Hashtags, handles, links, and emoji that the dictionary cannot score are
//! tolerated at the outer edges of a paragraph. Filters only ever narrow the
//! token slice, dropping a contiguous prefix or suffix.

use crate::dictionaries::SyllableDictionary;
use crate::token::{Token, is_symbol_or_punct};

/// A transformation over a sentence's tokens.
pub trait TokenFilter {
    /// Return the kept part of `tokens`.
    fn apply<'t>(&self, tokens: &'t [Token]) -> &'t [Token];
}

/// Drops unscorable tokens from the start of a sentence.
#[derive(Debug, Clone, Copy)]
pub struct TrimLeadingUnknown<'d> {
    dictionary: &'d SyllableDictionary,
}

impl<'d> TrimLeadingUnknown<'d> {
    /// Create a filter backed by `dictionary`.
    pub const fn new(dictionary: &'d SyllableDictionary) -> Self {
        Self { dictionary }
    }
}

impl TokenFilter for TrimLeadingUnknown<'_> {
    fn apply<'t>(&self, tokens: &'t [Token]) -> &'t [Token] {
        trim_leading_unknown(self.dictionary, tokens)
    }
}

/// Drops unscorable tokens from the end of a sentence.
#[derive(Debug, Clone, Copy)]
pub struct TrimTrailingUnknown<'d> {
    dictionary: &'d SyllableDictionary,
}

impl<'d> TrimTrailingUnknown<'d> {
    /// Create a filter backed by `dictionary`.
    pub const fn new(dictionary: &'d SyllableDictionary) -> Self {
        Self { dictionary }
    }
}

impl TokenFilter for TrimTrailingUnknown<'_> {
    fn apply<'t>(&self, tokens: &'t [Token]) -> &'t [Token] {
        trim_trailing_unknown(self.dictionary, tokens)
    }
}

/// Apply `filters` in order.
pub fn apply_filters<'t>(tokens: &'t [Token], filters: &[&dyn TokenFilter]) -> &'t [Token] {
    filters
        .iter()
        .fold(tokens, |remaining, filter| filter.apply(remaining))
}

fn is_kept_at_edge(dictionary: &SyllableDictionary, token: &Token) -> bool {
    dictionary.has_entry(&token.text) || is_symbol_or_punct(token)
}

/// Drop tokens from the front until one is scorable or punctuation.
pub fn trim_leading_unknown<'t>(
    dictionary: &SyllableDictionary,
    tokens: &'t [Token],
) -> &'t [Token] {
    let start = tokens
        .iter()
        .position(|token| is_kept_at_edge(dictionary, token))
        .unwrap_or(tokens.len());
    &tokens[start..]
}

/// Drop tokens from the back until one is scorable or punctuation.
pub fn trim_trailing_unknown<'t>(
    dictionary: &SyllableDictionary,
    tokens: &'t [Token],
) -> &'t [Token] {
    let end = tokens
        .iter()
        .rposition(|token| is_kept_at_edge(dictionary, token))
        .map_or(0, |last| last + 1);
    &tokens[..end]
}
