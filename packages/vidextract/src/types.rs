//! Core data types: validated input URLs and raw/extracted content.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    // Accepted post URL shape: scheme, twitter.com or x.com (optionally
    // www./mobile.), a username segment, /status/, numeric id. Matched as a
    // substring so share links with trailing query params still validate.
    static ref TWEET_URL_RE: Regex = Regex::new(
        r"https?://(?:(?:www|mobile)\.)?(?:twitter\.com|x\.com)/\w+/status/(\d+)"
    )
    .unwrap();
}

/// The input URL did not look like a tweet status link.
#[derive(Debug, Clone, Error)]
#[error("not a recognized tweet URL: {url}")]
pub struct InvalidTweetUrl {
    pub url: String,
}

/// A validated tweet status URL.
///
/// Construction is the validation gate: no network request is made anywhere
/// in this crate with anything other than a `TweetUrl`, so an input that
/// fails the pattern never reaches the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetUrl {
    url: String,
    status_id: String,
}

impl TweetUrl {
    /// Validate an input string against the accepted tweet URL pattern.
    pub fn parse(input: &str) -> Result<Self, InvalidTweetUrl> {
        let input = input.trim();
        let caps = TWEET_URL_RE.captures(input).ok_or_else(|| InvalidTweetUrl {
            url: input.to_string(),
        })?;

        Ok(Self {
            url: input.to_string(),
            status_id: caps[1].to_string(),
        })
    }

    /// The original URL as provided by the caller.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The numeric status id parsed out of the URL.
    pub fn status_id(&self) -> &str {
        &self.status_id
    }
}

/// Fetched body content, before extraction.
#[derive(Debug, Clone)]
pub enum RawContent {
    /// A parsed JSON payload, e.g. from the proxy API
    Json(serde_json::Value),
    /// Raw page markup
    Html(String),
}

impl RawContent {
    pub fn as_html(&self) -> Option<&str> {
        match self {
            RawContent::Html(html) => Some(html),
            RawContent::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            RawContent::Json(value) => Some(value),
            RawContent::Html(_) => None,
        }
    }
}

/// Outcome of running the extraction chain.
///
/// Invariant: `found()` is true iff a non-empty video URL is present; the
/// constructors are the only way to build a value, so the invariant holds
/// structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    video_url: Option<String>,
    diagnostic: String,
}

impl ExtractionResult {
    /// A successful extraction. Empty URLs are treated as a miss upstream
    /// and never reach this constructor.
    pub(crate) fn hit(video_url: String) -> Self {
        debug_assert!(!video_url.is_empty());
        Self {
            video_url: Some(video_url),
            diagnostic: String::new(),
        }
    }

    /// No strategy produced a URL; carries the caller-facing diagnostic.
    pub(crate) fn miss(diagnostic: impl Into<String>) -> Self {
        Self {
            video_url: None,
            diagnostic: diagnostic.into(),
        }
    }

    pub fn found(&self) -> bool {
        self.video_url.as_deref().is_some_and(|u| !u.is_empty())
    }

    pub fn video_url(&self) -> Option<&str> {
        self.video_url.as_deref()
    }

    /// Why extraction came up empty. Empty string on a hit.
    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_twitter_and_x_status_links() {
        for url in [
            "https://twitter.com/user/status/123456789",
            "http://twitter.com/some_user/status/1",
            "https://x.com/user/status/987654321",
            "https://www.twitter.com/user/status/42",
            "https://mobile.twitter.com/user/status/42",
            "https://x.com/user/status/42?s=20&t=abc",
        ] {
            let tweet = TweetUrl::parse(url).unwrap_or_else(|_| panic!("rejected {url}"));
            assert!(!tweet.status_id().is_empty());
        }
    }

    #[test]
    fn parses_status_id() {
        let tweet = TweetUrl::parse("https://x.com/user/status/1790000000000000001").unwrap();
        assert_eq!(tweet.status_id(), "1790000000000000001");
    }

    #[test]
    fn rejects_non_tweet_urls() {
        for url in [
            "",
            "not a url",
            "https://example.com/user/status/123",
            "https://twitter.com/user",
            "https://twitter.com/user/status/",
            "https://twitter.com/user/status/abc",
            "twitter.com/user/status/123",
        ] {
            assert!(TweetUrl::parse(url).is_err(), "accepted {url}");
        }
    }

    #[test]
    fn found_iff_url_present() {
        let hit = ExtractionResult::hit("https://video.twimg.com/a.mp4".into());
        assert!(hit.found());
        assert_eq!(hit.video_url(), Some("https://video.twimg.com/a.mp4"));

        let miss = ExtractionResult::miss("no video");
        assert!(!miss.found());
        assert_eq!(miss.video_url(), None);
        assert_eq!(miss.diagnostic(), "no video");
    }
}
