//! Found haikus and their rendering.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use crate::token::{Token, is_symbol_or_punct};

/// Syllables in a whole haiku of the given form, or `None` if the sum
/// overflows.
pub fn form_syllables(line_sizes: &[usize]) -> Option<usize> {
    line_sizes.iter().try_fold(0usize, |total, &size| total.checked_add(size))
}

/// Lines of tokens whose syllable counts match the requested line sizes.
///
/// Two haikus are equal when they render to the same text, regardless of
/// which tokens produced them.
#[derive(Debug, Clone)]
pub struct Haiku {
    lines: Vec<Vec<Token>>,
}

impl Haiku {
    pub(crate) const fn new(lines: Vec<Vec<Token>>) -> Self {
        Self { lines }
    }

    /// Token lines, punctuation included.
    pub fn lines(&self) -> &[Vec<Token>] {
        &self.lines
    }

    /// Render each line as display text.
    ///
    /// Words are joined with single spaces. Punctuation attaches to the token
    /// before it; punctuation that opens a line has nothing to attach to and
    /// is left out.
    pub fn render(&self) -> Vec<String> {
        self.lines.iter().map(|line| render_line(line)).collect()
    }

    /// Text of the last word on the last line.
    pub fn final_word(&self) -> Option<&str> {
        self.lines
            .last()?
            .iter()
            .rev()
            .find(|token| !is_symbol_or_punct(token))
            .map(|token| token.text.as_str())
    }
}

fn render_line(line: &[Token]) -> String {
    let mut rendered = String::new();
    for token in line {
        if is_symbol_or_punct(token) {
            if !rendered.is_empty() {
                rendered.push_str(&token.text);
            }
            continue;
        }
        if !rendered.is_empty() {
            rendered.push(' ');
        }
        rendered.push_str(&token.text);
    }
    rendered
}

impl fmt::Display for Haiku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().join("\n"))
    }
}

impl PartialEq for Haiku {
    fn eq(&self, other: &Self) -> bool {
        self.render() == other.render()
    }
}

impl Eq for Haiku {}

impl Hash for Haiku {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.render().hash(state);
    }
}

impl Serialize for Haiku {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.render().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(words: &[&str]) -> Vec<Token> {
        crate::text::split_tokens(&words.join(" "))
    }

    #[test]
    fn form_syllables_checks_overflow() {
        assert_eq!(form_syllables(&[5, 7, 5]), Some(17));
        assert_eq!(form_syllables(&[]), Some(0));
        assert_eq!(form_syllables(&[usize::MAX, 1]), None);
    }

    #[test]
    fn punctuation_attaches_to_previous_word() {
        let haiku = Haiku::new(vec![
            line(&["this", "is", "a", "haiku."]),
            line(&["hope", "the", "test", "finds", "it", "alright,"]),
            line(&["i", "think", "that", "it", "should."]),
        ]);
        assert_eq!(
            haiku.render(),
            vec![
                "this is a haiku.",
                "hope the test finds it alright,",
                "i think that it should.",
            ]
        );
    }

    #[test]
    fn leading_punctuation_is_dropped() {
        let haiku = Haiku::new(vec![line(&["\"He", "asked", "me"])]);
        assert_eq!(haiku.render(), vec!["He asked me"]);
    }

    #[test]
    fn display_joins_lines_with_newlines() {
        let haiku = Haiku::new(vec![line(&["one"]), line(&["two", "three!"])]);
        assert_eq!(haiku.to_string(), "one\ntwo three!");
    }

    #[test]
    fn final_word_skips_trailing_punctuation() {
        let haiku = Haiku::new(vec![line(&["x"]), line(&["in", "the", "same", "sentence."])]);
        assert_eq!(haiku.final_word(), Some("sentence"));

        let punct_only = Haiku::new(vec![line(&["!"])]);
        assert_eq!(punct_only.final_word(), None);
    }

    #[test]
    fn equality_is_by_rendered_text() {
        let plain = Haiku::new(vec![line(&["hope", "it", "works"])]);
        let quoted = Haiku::new(vec![line(&["\"hope", "it", "works"])]);
        assert_ne!(plain.lines(), quoted.lines());
        assert_eq!(plain, quoted);
    }

    #[test]
    fn serializes_as_rendered_lines() {
        let haiku = Haiku::new(vec![line(&["one,", "two"]), line(&["three"])]);
        let json = serde_json::to_string(&haiku).unwrap();
        assert_eq!(json, r#"["one, two","three"]"#);
    }
}
