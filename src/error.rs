//! API error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum AppError {
    /// The caller left out a required field or sent an unreadable body.
    #[error("{0}")]
    InvalidArgument(String),

    /// Unexpected failure. Only `context` reaches the client.
    #[error("{context}")]
    Internal {
        context: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn internal(context: &'static str, source: impl Into<anyhow::Error>) -> Self {
        AppError::Internal {
            context,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body returned by every endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidArgument(message) => {
                tracing::warn!("⚠️ Rejected request: {}", message);
            }
            AppError::Internal { context, source } => {
                tracing::error!("🔥 {}: {:#}", context, source);
            }
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let invalid = AppError::InvalidArgument("Query is required".to_string());
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let internal = AppError::internal("Search failed", anyhow::anyhow!("boom"));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_message_hides_cause() {
        let err = AppError::internal("Analysis failed", anyhow::anyhow!("secret detail"));
        assert_eq!(err.to_string(), "Analysis failed");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::InvalidArgument("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
