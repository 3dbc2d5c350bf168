//! Upstream content fetching.
//!
//! Two fetch paths, tried in order by the pipeline: a structured proxy API
//! keyed by the status id, then the post page itself with browser-like
//! headers. Exactly one request each — retry policy is the documented
//! two-step fallback and nothing more.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::types::{RawContent, TweetUrl};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const API_TIMEOUT: Duration = Duration::from_secs(10);
const PAGE_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches tweet content from upstream.
///
/// The `reqwest::Client` is constructed once and reused across requests;
/// per-request timeouts differ between the API and page paths.
pub struct Fetcher {
    client: reqwest::Client,
    proxy_base: String,
}

impl Fetcher {
    /// Create a fetcher against the given proxy API base URL
    /// (e.g. `https://api.vxtwitter.com`).
    pub fn new(proxy_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client"),
            proxy_base: proxy_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Use a pre-built HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Query the proxy API for structured media metadata.
    pub async fn fetch_api(&self, tweet: &TweetUrl) -> FetchResult<RawContent> {
        let url = format!("{}/i/status/{}", self.proxy_base, tweet.status_id());
        debug!(url = %url, "proxy API fetch starting");

        let response = self
            .client
            .get(&url)
            .timeout(API_TIMEOUT)
            .send()
            .await
            .map_err(|e| classify_transport(e, &url))?;

        check_status(response.status(), &url)?;

        let payload = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| classify_transport(e, &url))?;

        debug!(url = %url, "proxy API responded");
        Ok(RawContent::Json(payload))
    }

    /// Fetch the post page directly, with headers a real browser would send
    /// to reduce the chance of being blocked.
    pub async fn fetch_page(&self, tweet: &TweetUrl) -> FetchResult<RawContent> {
        let url = tweet.as_str();
        debug!(url = %url, "page fetch starting");

        let response = self
            .client
            .get(url)
            .headers(browser_headers())
            .timeout(PAGE_TIMEOUT)
            .send()
            .await
            .map_err(|e| classify_transport(e, url))?;

        check_status(response.status(), url)?;

        let html = response
            .text()
            .await
            .map_err(|e| classify_transport(e, url))?;

        debug!(url = %url, content_length = html.len(), "page fetched");
        Ok(RawContent::Html(html))
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
        ),
    );
    // Accept-Encoding is left to the client so response decompression stays
    // automatic; gzip/br/deflate are enabled as crate features.
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert("DNT", HeaderValue::from_static("1"));
    headers.insert("Connection", HeaderValue::from_static("keep-alive"));
    headers.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));
    headers.insert("Sec-Fetch-Dest", HeaderValue::from_static("document"));
    headers.insert("Sec-Fetch-Mode", HeaderValue::from_static("navigate"));
    headers.insert("Sec-Fetch-Site", HeaderValue::from_static("none"));
    headers.insert("Cache-Control", HeaderValue::from_static("max-age=0"));
    headers
}

/// Map a transport error to a classified failure. Timeouts get their own
/// variant so callers can report them as such rather than a generic error.
fn classify_transport(err: reqwest::Error, url: &str) -> FetchError {
    if err.is_timeout() {
        warn!(url = %url, "fetch timed out");
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        warn!(url = %url, error = %err, "fetch failed");
        FetchError::Network(err)
    }
}

/// Classify a non-success status. 404/403/429 are the statuses the service
/// reports distinctly; everything else keeps the raw code.
fn check_status(status: StatusCode, url: &str) -> FetchResult<()> {
    if status.is_success() {
        return Ok(());
    }
    warn!(url = %url, status = status.as_u16(), "upstream returned error status");
    Err(match status.as_u16() {
        404 => FetchError::NotFound {
            url: url.to_string(),
        },
        403 => FetchError::Forbidden {
            url: url.to_string(),
        },
        429 => FetchError::RateLimited,
        other => FetchError::Status { status: other },
    })
}
