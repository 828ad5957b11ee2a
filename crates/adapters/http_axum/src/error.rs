//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failure while resolving an asset.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// No asset at this path, or the path escapes the public directory.
    #[error("asset {0} not found")]
    NotFound(String),
}

impl IntoResponse for AssetError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(path) => {
                tracing::debug!(%path, "asset not found");
                StatusCode::NOT_FOUND.into_response()
            }
        }
    }
}
