//! Per-tweet processing.

use serde::Serialize;

use crate::detector::HaikuDetector;
use crate::haiku::Haiku;
use crate::tokenize::{RuleTokenizer, Tokenizer};
use crate::tweet::Tweet;

/// A tweet bundled with the haikus found in it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HaikuOutput {
    /// Distinct haikus, in discovery order.
    pub haikus: Vec<Haiku>,
    /// The source tweet.
    pub tweet: Tweet,
}

/// Runs the detector over tweets.
#[derive(Debug, Clone)]
pub struct Processor<T = RuleTokenizer> {
    detector: HaikuDetector<T>,
    keywords: Vec<String>,
}

impl<T: Tokenizer> Processor<T> {
    /// Create a processor that accepts every tweet.
    pub const fn new(detector: HaikuDetector<T>) -> Self {
        Self {
            detector,
            keywords: Vec::new(),
        }
    }

    /// Only accept tweets mentioning at least one of `keywords`, ignoring case.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    /// The detector used for each tweet.
    pub const fn detector(&self) -> &HaikuDetector<T> {
        &self.detector
    }

    /// Whether the tweet passes the keyword filter.
    pub fn matches_keywords(&self, tweet: &Tweet) -> bool {
        if self.keywords.is_empty() {
            return true;
        }
        let text = tweet.full_text().to_lowercase();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }

    /// Detect haikus in one tweet.
    ///
    /// Returns `None` when the tweet is filtered out or its text has no usable
    /// paragraph. A usable tweet without haikus yields an output with an empty
    /// haiku list.
    #[tracing::instrument(skip_all, fields(id = %tweet.id_str))]
    pub fn process(&self, tweet: Tweet) -> Option<HaikuOutput> {
        if !self.matches_keywords(&tweet) {
            tracing::trace!("tweet does not mention any keyword");
            return None;
        }
        let paragraph = self.detector.build_paragraph(tweet.full_text());
        if paragraph.is_empty() {
            return None;
        }
        let haikus = paragraph.find_haikus(self.detector.line_sizes());
        Some(HaikuOutput { haikus, tweet })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::dictionary;
    use std::sync::Arc;

    const HAIKU_TEXT: &str =
        "this is a haiku. hope the test finds it alright, i think that it should.";

    fn processor() -> Processor {
        Processor::new(HaikuDetector::new(Arc::new(dictionary())))
    }

    #[test]
    fn usable_tweet_without_haiku_has_empty_output() {
        let output = processor().process(Tweet::from_text("no haikus here")).unwrap();
        assert!(output.haikus.is_empty());
    }

    #[test]
    fn finds_haiku_in_tweet() {
        let output = processor().process(Tweet::from_text(HAIKU_TEXT)).unwrap();
        assert_eq!(output.haikus.len(), 1);
        assert_eq!(
            output.haikus[0].render(),
            vec![
                "this is a haiku.",
                "hope the test finds it alright,",
                "i think that it should.",
            ]
        );
    }

    #[test]
    fn unusable_text_yields_none() {
        assert!(processor().process(Tweet::from_text("#only #junk")).is_none());
        assert!(
            processor()
                .process(Tweet::from_text("hope 64th works. this is a haiku."))
                .is_none()
        );
    }

    #[test]
    fn keywords_filter_tweets() {
        let processor = processor().with_keywords(["HAIKU", " "]);
        assert!(processor.process(Tweet::from_text(HAIKU_TEXT)).is_some());
        assert!(processor.process(Tweet::from_text("no haikus here")).is_some());
        assert!(processor.process(Tweet::from_text("this is it")).is_none());
    }

    #[test]
    fn output_serializes_with_capitalized_keys() {
        let output = processor().process(Tweet::from_text(HAIKU_TEXT)).unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["Haikus"][0][2], "i think that it should.");
        assert_eq!(json["Tweet"]["text"], HAIKU_TEXT);
    }
}
