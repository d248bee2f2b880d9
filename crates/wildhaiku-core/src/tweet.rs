//! The subset of a Twitter API status object the detector needs.

use serde::{Deserialize, Serialize};

/// Language the detector's dictionary covers.
pub const SUPPORTED_LANG: &str = "en";

/// A tweet as delivered by the streaming API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    /// Tweet id as a string.
    #[serde(default)]
    pub id_str: String,
    /// BCP 47 language tag detected by Twitter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Author of the tweet.
    #[serde(default)]
    pub user: User,
    /// Possibly truncated text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Untruncated text for long tweets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_tweet: Option<ExtendedTweet>,
    /// The original tweet when this one is a plain retweet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retweeted_status: Option<Box<Tweet>>,
}

/// Tweet author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Handle without the leading `@`.
    #[serde(default)]
    pub screen_name: String,
}

/// Extended payload carried by tweets longer than 140 characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedTweet {
    /// The complete tweet text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub full_text: String,
}

impl Tweet {
    /// Tweet with the given text and nothing else set.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// The extended text when present, otherwise the plain text.
    pub fn full_text(&self) -> &str {
        match &self.extended_tweet {
            Some(extended) if !extended.full_text.is_empty() => &extended.full_text,
            _ => &self.text,
        }
    }

    /// Link to the tweet on twitter.com.
    pub fn permalink(&self) -> String {
        format!(
            "https://twitter.com/{}/status/{}",
            self.user.screen_name, self.id_str
        )
    }

    /// Resolve a retweet to the tweet it shares.
    ///
    /// Plain retweets add no text of their own, and attributing a haiku to
    /// the original author is more useful.
    #[must_use]
    pub fn into_original(self) -> Self {
        match self.retweeted_status {
            Some(original) => *original,
            None => self,
        }
    }

    /// Whether the tweet is worth scanning: it has text, and its language is
    /// English or unknown.
    pub fn is_scannable(&self) -> bool {
        !self.full_text().is_empty()
            && self.lang.as_deref().is_none_or(|lang| lang == SUPPORTED_LANG)
    }
}

/// Decode one line of a JSON-lines tweet stream.
///
/// Returns `Ok(None)` for keep-alive blank lines and for tweets that should
/// be skipped. Retweets resolve to their original.
pub fn parse_stream_line(line: &str) -> Result<Option<Tweet>, serde_json::Error> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let tweet = serde_json::from_str::<Tweet>(line)?.into_original();
    Ok(tweet.is_scannable().then_some(tweet))
}
