//! Typed errors for fetch operations.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to keep failure
//! classes matchable by callers that turn them into HTTP responses.

use thiserror::Error;

/// Errors that can occur while fetching upstream content.
///
/// Status-derived variants mirror the upstream responses the service cares
/// about; everything else collapses into [`FetchError::Status`] or
/// [`FetchError::Network`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request exceeded its deadline
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// Upstream answered 404
    #[error("upstream returned 404 for: {url}")]
    NotFound { url: String },

    /// Upstream answered 403
    #[error("upstream returned 403 for: {url}")]
    Forbidden { url: String },

    /// Upstream answered 429
    #[error("rate limited by upstream")]
    RateLimited,

    /// Any other non-success status
    #[error("upstream returned HTTP {status}")]
    Status { status: u16 },

    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
