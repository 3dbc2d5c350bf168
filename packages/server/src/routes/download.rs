//! The download endpoint: tweet URL in, video URL out.

use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use vidextract::TweetUrl;

use crate::app::AppState;
use crate::error::ApiError;

const INVALID_URL_MESSAGE: &str =
    "Please enter a valid Twitter URL (e.g., https://twitter.com/user/status/123456789)";

#[derive(Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub success: bool,
    pub video_url: String,
    pub download_url: String,
    pub message: String,
}

/// Resolve a tweet URL to a direct video URL.
///
/// Validation happens before the grabber is touched, so a bad URL never
/// causes a network call.
pub async fn download_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<DownloadRequest>,
) -> Result<Json<DownloadResponse>, ApiError> {
    let url = request
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("URL is required".to_string()))?;

    let tweet = TweetUrl::parse(&url)
        .map_err(|_| ApiError::Validation(INVALID_URL_MESSAGE.to_string()))?;

    info!(url = %tweet.as_str(), "processing tweet URL");

    let result = state.grabber.grab(&tweet).await?;

    match result.video_url() {
        Some(video_url) => Ok(Json(DownloadResponse {
            success: true,
            video_url: video_url.to_string(),
            download_url: video_url.to_string(),
            message: "Video found successfully!".to_string(),
        })),
        None => Err(ApiError::NotFound(result.diagnostic().to_string())),
    }
}
