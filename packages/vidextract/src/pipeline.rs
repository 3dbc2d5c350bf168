//! Fetch-then-extract orchestration.

use tracing::{debug, info};

use crate::error::FetchResult;
use crate::extract::extract;
use crate::fetcher::Fetcher;
use crate::types::{ExtractionResult, TweetUrl};

/// Resolves a tweet URL to a video URL via the two-step fetch fallback.
///
/// Stateless apart from the shared HTTP client; one instance can serve
/// concurrent requests.
pub struct VideoGrabber {
    fetcher: Fetcher,
}

impl VideoGrabber {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Proxy API first; on fetch failure or extraction miss, scrape the
    /// page. The API attempt never fails the request — only the page path
    /// propagates fetch errors.
    pub async fn grab(&self, tweet: &TweetUrl) -> FetchResult<ExtractionResult> {
        match self.fetcher.fetch_api(tweet).await {
            Ok(content) => {
                let result = extract(&content);
                if result.found() {
                    info!(url = %tweet.as_str(), "video resolved via proxy API");
                    return Ok(result);
                }
                debug!(url = %tweet.as_str(), "proxy API had no video, scraping page");
            }
            Err(err) => {
                debug!(url = %tweet.as_str(), error = %err, "proxy API failed, scraping page");
            }
        }

        let content = self.fetcher.fetch_page(tweet).await?;
        let result = extract(&content);
        if result.found() {
            info!(url = %tweet.as_str(), "video resolved via page scrape");
        }
        Ok(result)
    }
}
