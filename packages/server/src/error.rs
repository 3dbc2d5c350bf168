//! API error taxonomy and response mapping.
//!
//! Validation failures map to 400, "no video found" to 404, and every
//! upstream fetch failure to 500 with a per-class human-readable message.
//! All error responses share the `{ "success": false, "error": … }` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use vidextract::FetchError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input URL
    #[error("{0}")]
    Validation(String),

    /// Extraction ran but found no video; carries the diagnostic text
    #[error("{0}")]
    NotFound(String),

    /// The upstream fetch failed
    #[error(transparent)]
    Upstream(#[from] FetchError),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Upstream(err) => {
                warn!(error = %err, "upstream fetch failed");
                (StatusCode::INTERNAL_SERVER_ERROR, upstream_message(err))
            }
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

/// Human-readable message for each upstream failure class.
fn upstream_message(err: &FetchError) -> String {
    match err {
        FetchError::NotFound { .. } => "Tweet not found. Please check the URL.",
        FetchError::Forbidden { .. } => {
            "Access denied. The tweet might be private, restricted, or require login."
        }
        FetchError::RateLimited => "Rate limit exceeded. Please wait a few minutes and try again.",
        FetchError::Timeout { .. } => "Request timeout. Please try again.",
        FetchError::Network(_) => "Network error. Please check your connection.",
        FetchError::Status { .. } => "Failed to fetch video. Please try again.",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_error_classes() {
        let cases = [
            (ApiError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (ApiError::NotFound("none".into()), StatusCode::NOT_FOUND),
            (
                ApiError::Upstream(FetchError::RateLimited),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn timeout_gets_a_classified_message() {
        let msg = upstream_message(&FetchError::Timeout {
            url: "https://x.com/u/status/1".into(),
        });
        assert_eq!(msg, "Request timeout. Please try again.");
    }

    #[test]
    fn forbidden_mentions_private_tweets() {
        let msg = upstream_message(&FetchError::Forbidden {
            url: "https://x.com/u/status/1".into(),
        });
        assert!(msg.contains("private"));
    }
}
