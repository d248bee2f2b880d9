//! Text processing utilities.
//!
//! Provides sentence splitting and word tokenization tuned for short social
//! text: lowercase sentence starts, hashtags, handles, links, and emoji.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::is_abbreviation;
use crate::token::{Token, TokenTag, is_symbol_or_punct_char};

/// Regex for decimal numbers (3.14, 2.5, etc.).
static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("valid regex"));

/// Regex for URLs.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://|www\.)\S+").expect("valid regex"));

/// Regex for email addresses.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

/// Regex for initials (J.K., U.S.A., etc.).
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]\.(?:[A-Z]\.)*").expect("valid regex"));

/// Characters peeled off the front of a word into their own tokens.
const OPENING_MARKS: &[char] = &['"', '\'', '(', '[', '{', '“', '‘', '«', '¿', '¡'];

/// Characters peeled off the back of a word into their own tokens.
const CLOSING_MARKS: &[char] = &[
    '.', ',', ';', ':', '!', '?', '"', '\'', ')', ']', '}', '”', '’', '»', '…',
];

/// Closing quotes and brackets that stay with the sentence they end.
const TRAILING_CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '”', '’', '»'];

/// Split text into sentences with abbreviation, decimal, URL, and email awareness.
///
/// Uses a character-by-character scan with context-based boundary detection.
/// A blank line always ends a sentence. Unlike edited prose, a lowercase
/// letter after a period still starts a new sentence.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '\n' && chars.get(i + 1) == Some(&'\n') {
            push_sentence(&mut sentences, &mut current);
            i += 2;
            continue;
        }

        current.push(ch);

        if is_sentence_terminator(ch) {
            let context = extract_context(&chars, i);

            if is_sentence_boundary(&context, &current) {
                while let Some(&next) = chars.get(i + 1) {
                    if !TRAILING_CLOSERS.contains(&next) {
                        break;
                    }
                    current.push(next);
                    i += 1;
                }
                push_sentence(&mut sentences, &mut current);
            }
        }

        i += 1;
    }

    push_sentence(&mut sentences, &mut current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let sentence = current.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
    current.clear();
}

/// Split one sentence into word and punctuation tokens.
///
/// Words are whitespace-delimited; leading opening marks and trailing closing
/// marks are split into single-character punctuation tokens. Everything else
/// stays attached, so hashtags, handles, links, and contractions survive as
/// single tokens. A run made only of symbols becomes one token per character.
pub fn split_tokens(sentence: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for chunk in sentence.split_whitespace() {
        push_chunk(chunk, &mut tokens);
    }
    tokens
}

fn push_chunk(chunk: &str, tokens: &mut Vec<Token>) {
    if chunk.chars().all(is_symbol_or_punct_char) {
        for c in chunk.chars() {
            push_token(tokens, c.to_string(), TokenTag::Punct);
        }
        return;
    }

    let mut core = chunk;
    while let Some(c) = core.chars().next() {
        if !OPENING_MARKS.contains(&c) {
            break;
        }
        push_token(tokens, c.to_string(), TokenTag::Punct);
        core = &core[c.len_utf8()..];
    }

    let mut trailing = Vec::new();
    while let Some(c) = core.chars().next_back() {
        if !CLOSING_MARKS.contains(&c) {
            break;
        }
        trailing.push(c);
        core = &core[..core.len() - c.len_utf8()];
    }

    push_token(tokens, core.to_string(), TokenTag::Word);
    for c in trailing.into_iter().rev() {
        push_token(tokens, c.to_string(), TokenTag::Punct);
    }
}

fn push_token(tokens: &mut Vec<Token>, text: String, tag: TokenTag) {
    let index = tokens.len();
    tokens.push(Token::new(text, tag, index));
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Context around a potential sentence boundary.
struct SentenceContext {
    punctuation: char,
    word_before: String,
    next_raw: Option<char>,
    char_after: Option<char>,
    text_after: String,
    is_end_of_text: bool,
}

fn extract_context(chars: &[char], pos: usize) -> SentenceContext {
    let before = get_word_before(chars, pos);

    let mut after_start = pos + 1;
    while after_start < chars.len() && chars[after_start].is_whitespace() {
        after_start += 1;
    }

    let after_char = chars.get(after_start).copied();
    let after_text: String = chars[after_start..].iter().take(20).collect();

    SentenceContext {
        punctuation: chars[pos],
        word_before: before,
        next_raw: chars.get(pos + 1).copied(),
        char_after: after_char,
        text_after: after_text,
        is_end_of_text: pos == chars.len() - 1,
    }
}

fn get_word_before(chars: &[char], pos: usize) -> String {
    let mut i = pos;

    // Skip back past punctuation and whitespace
    while i > 0 {
        i -= 1;
        if !chars[i].is_whitespace() && chars[i] != '.' {
            break;
        }
    }

    // Collect the word
    let mut word_chars = Vec::new();
    loop {
        if chars[i].is_alphanumeric() || chars[i] == '.' {
            word_chars.push(chars[i]);
        } else {
            break;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }

    word_chars.reverse();
    word_chars.iter().collect()
}

fn is_sentence_boundary(context: &SentenceContext, current_sentence: &str) -> bool {
    if context.is_end_of_text {
        return true;
    }

    // Runs like "?!" or "..." end on their last mark
    if context.next_raw.is_some_and(is_sentence_terminator) {
        return false;
    }

    if context.punctuation == '!' || context.punctuation == '?' {
        return check_next_char_capitalization(context);
    }

    // For periods, apply heuristics
    if is_likely_abbreviation(&context.word_before) {
        return false;
    }

    if is_likely_initial(&context.word_before) {
        return false;
    }

    if is_decimal_number(current_sentence) {
        return false;
    }

    if current_sentence.ends_with("...") {
        return false;
    }

    // A period inside a link or address, e.g. "t.co/abc"
    if contains_url_or_email(current_sentence)
        && context.next_raw.is_some_and(|c| !c.is_whitespace())
    {
        return false;
    }

    // Digit after period following a digit = decimal number (e.g., "3.14")
    if let Some(next_char) = context.char_after
        && next_char.is_ascii_digit()
        && context
            .word_before
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit())
    {
        return false;
    }

    true
}

fn check_next_char_capitalization(context: &SentenceContext) -> bool {
    if let Some(next_char) = context.char_after
        && (next_char == '"' || next_char == '\'')
        && context.next_raw.is_some_and(char::is_whitespace)
    {
        // An opening quote after a space starts the next sentence only if
        // the quoted text does.
        return context
            .text_after
            .chars()
            .nth(1)
            .is_none_or(|c| !c.is_lowercase());
    }
    true
}

fn is_likely_abbreviation(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let word_clean = word.trim_end_matches('.');
    if is_abbreviation(word_clean) {
        return true;
    }
    // Single uppercase letter = likely initial/abbreviation
    word_clean.len() == 1 && word_clean.chars().next().is_some_and(|c| c.is_uppercase())
}

fn is_likely_initial(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    if word.len() == 2
        && word.chars().next().is_some_and(|c| c.is_uppercase())
        && word.ends_with('.')
    {
        return true;
    }
    INITIALS_PATTERN.is_match(word)
}

fn is_decimal_number(sentence: &str) -> bool {
    let last_part: String = sentence
        .chars()
        .rev()
        .take(10)
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    DECIMAL_PATTERN.is_match(&last_part)
}

fn contains_url_or_email(sentence: &str) -> bool {
    let last_word = sentence.split_whitespace().next_back().unwrap_or("");
    URL_PATTERN.is_match(last_word) || EMAIL_PATTERN.is_match(last_word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences, vec!["This is a sentence.", "This is another sentence."]);
    }

    #[test]
    fn lowercase_start_still_splits() {
        let sentences = split_sentences("here is some bad text. it is not a haiku.");
        assert_eq!(sentences, vec!["here is some bad text.", "it is not a haiku."]);
    }

    #[test]
    fn abbreviations_not_split() {
        let sentences = split_sentences("Dr. Smith went to the store. He bought milk.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Dr. Smith"));
    }

    #[test]
    fn decimal_numbers_not_split() {
        let sentences = split_sentences("The price is 3.14 dollars. That's cheap.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.14"));
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = split_sentences("Are you serious? I can't believe it! This is amazing.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn punctuation_runs_stay_together() {
        let sentences = split_sentences("wait what?! no way... that is wild");
        assert_eq!(sentences, vec!["wait what?!", "no way... that is wild"]);
    }

    #[test]
    fn closing_quote_stays_with_its_sentence() {
        let sentences = split_sentences("\"I want to go to Buffalo.\"\n\nWe're pumped.");
        assert_eq!(sentences, vec!["\"I want to go to Buffalo.\"", "We're pumped."]);
    }

    #[test]
    fn blank_line_ends_sentence() {
        let sentences = split_sentences("no period here\n\nnext thought");
        assert_eq!(sentences, vec!["no period here", "next thought"]);
    }

    #[test]
    fn links_are_not_split() {
        let sentences = split_sentences("Cody. #BillsMafia https://t.co/kLZ6ddIoLo");
        assert_eq!(sentences, vec!["Cody.", "#BillsMafia https://t.co/kLZ6ddIoLo"]);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn tokens_split_trailing_punctuation() {
        let tokens = split_tokens("hope the test finds it alright, i think.");
        assert_eq!(
            texts(&tokens),
            vec!["hope", "the", "test", "finds", "it", "alright", ",", "i", "think", "."]
        );
        assert_eq!(tokens[6].tag, TokenTag::Punct);
        assert_eq!(tokens[6].index, 6);
    }

    #[test]
    fn tokens_keep_hashtags_handles_and_contractions() {
        let tokens = split_tokens("@startingjunk #hi ain't it https://t.co/x");
        assert_eq!(
            texts(&tokens),
            vec!["@startingjunk", "#hi", "ain't", "it", "https://t.co/x"]
        );
        assert!(tokens.iter().all(|t| t.tag == TokenTag::Word));
    }

    #[test]
    fn tokens_split_quotes_and_brackets() {
        let tokens = split_tokens("\"The Beatles\" (prize)?");
        assert_eq!(
            texts(&tokens),
            vec!["\"", "The", "Beatles", "\"", "(", "prize", ")", "?"]
        );
    }

    #[test]
    fn symbol_runs_become_single_characters() {
        let tokens = split_tokens("mean -- & more");
        assert_eq!(texts(&tokens), vec!["mean", "-", "-", "&", "more"]);
        assert_eq!(tokens[3].tag, TokenTag::Punct);
    }
}
