use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::providers::ProviderError;

/// Error body returned to HTTP callers.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "upstream error: connection refused")]
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Upstream authentication failed: {0}")]
    UpstreamAuth(String),

    #[error("Upstream rate limited")]
    UpstreamRateLimited,

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] anyhow::Error),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::AuthFailed(msg) => AppError::UpstreamAuth(msg),
            ProviderError::RateLimited => AppError::UpstreamRateLimited,
            // Transport failures, malformed responses, and an unconfigured
            // key all surface as a generic 500 with the raw message.
            ProviderError::NetworkError(msg)
            | ProviderError::ApiError(msg)
            | ProviderError::NotConfigured(msg) => AppError::UpstreamError(msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UpstreamAuth(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamRateLimited => StatusCode::SERVICE_UNAVAILABLE,
            AppError::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match self {
            AppError::ValidationError(msg) => msg,
            AppError::UpstreamAuth(msg) => msg,
            AppError::UpstreamRateLimited => "upstream rate limited".to_string(),
            AppError::UpstreamError(msg) => msg,
            AppError::ConfigError(err) => err.to_string(),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
