// Error types for catalog loading and page lookup

use std::path::PathBuf;
use thiserror::Error;

#[cfg(feature = "server")]
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};

/// Failure to obtain a usable project collection
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed project data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to resolve the project a detail page asks for
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("no project id in request")]
    MissingId,

    #[error("project not found: {0}")]
    NotFound(String),
}

// ============================================================================
// JSON error responses
// ============================================================================

#[cfg(feature = "server")]
#[derive(Debug)]
pub enum AppError {
    Load(LoadError),
}

#[cfg(feature = "server")]
impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        AppError::Load(err)
    }
}

#[cfg(feature = "server")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Load(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
