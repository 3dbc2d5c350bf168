//! Application setup and router configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use vidextract::{Fetcher, VideoGrabber};

use crate::routes::{download_handler, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub grabber: Arc<VideoGrabber>,
}

impl AppState {
    pub fn new(proxy_api_base: &str) -> Self {
        Self {
            grabber: Arc::new(VideoGrabber::new(Fetcher::new(proxy_api_base))),
        }
    }
}

/// Build the Axum application router.
///
/// Every response carries `Access-Control-Allow-Origin: *`; the CORS layer
/// also answers OPTIONS preflights. Non-POST methods on the download route
/// get axum's 405.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/download", post(download_handler))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
