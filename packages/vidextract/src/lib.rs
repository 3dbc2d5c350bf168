//! Tweet Video URL Extraction Library
//!
//! Given a twitter.com / x.com status link, this crate resolves a direct
//! video media URL in two steps:
//!
//! 1. [`Fetcher`] retrieves raw content — first from a structured proxy API
//!    keyed by the status id, then (on failure or miss) the post page itself,
//!    fetched with browser-like headers.
//! 2. [`extract`] runs an ordered chain of heuristics over that content and
//!    returns the first plausible video URL, normalized to an absolute URL.
//!
//! The extraction chain is pure (no I/O) and bounded: every strategy either
//! produces a candidate URL or falls through to the next one, and the
//! recursive JSON scan carries an explicit traversal budget so untrusted
//! third-party payloads cannot make it spin.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vidextract::{Fetcher, TweetUrl, VideoGrabber};
//!
//! let tweet = TweetUrl::parse("https://x.com/user/status/123456789")?;
//! let grabber = VideoGrabber::new(Fetcher::new("https://api.vxtwitter.com"));
//! let result = grabber.grab(&tweet).await?;
//! if let Some(url) = result.video_url() {
//!     println!("{url}");
//! }
//! ```
//!
//! # Modules
//!
//! - [`types`] - Validated input URL and the raw/extracted content types
//! - [`fetcher`] - Proxy-API and page fetching with failure classification
//! - [`extract`] - The strategy chain and URL normalization
//! - [`pipeline`] - Fetch-then-extract orchestration
//! - [`error`] - Typed fetch errors

pub mod error;
pub mod extract;
pub mod fetcher;
pub mod pipeline;
pub mod types;

// Re-export core types at crate root
pub use error::{FetchError, FetchResult};
pub use extract::extract;
pub use fetcher::Fetcher;
pub use pipeline::VideoGrabber;
pub use types::{ExtractionResult, InvalidTweetUrl, RawContent, TweetUrl};
