//! HTTP Error Handling
//!
//! 所有错误响应体均为 `{"error": "..."}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ports::{ProviderError, ProviderErrorKind};
use crate::application::ApplicationError;

pub const TTS_NOT_CONFIGURED: &str =
    "Text-to-Speech service is not available. Please check your Google Cloud configuration.";
pub const TTS_NOT_AVAILABLE: &str = "Text-to-Speech service is not available";
pub const NO_JSON_DATA: &str = "No JSON data provided";
pub const PERMISSION_DENIED: &str =
    "Permission denied. Please check your Google Cloud credentials and API access.";
pub const PROVIDER_UNAVAILABLE: &str =
    "TTS service is currently unavailable. Please try again later.";
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const REQUEST_TIMEOUT: &str = "Request timeout";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Forbidden(String),
    NotFound(String),
    Internal(String),
    ServiceUnavailable(String),
}

impl ApiError {
    /// 合成失败 -> HTTP 错误
    ///
    /// | 分类 | 状态码 |
    /// |---|---|
    /// | PermissionDenied | 403 |
    /// | InvalidArgument | 400 |
    /// | Unimplemented | 503 |
    /// | Other | 500 |
    pub fn from_synthesis_failure(err: ProviderError) -> Self {
        match err.kind {
            ProviderErrorKind::PermissionDenied => ApiError::Forbidden(PERMISSION_DENIED.to_string()),
            ProviderErrorKind::InvalidArgument => {
                ApiError::BadRequest(format!("Invalid request parameters: {}", err))
            }
            ProviderErrorKind::Unimplemented => {
                ApiError::ServiceUnavailable(PROVIDER_UNAVAILABLE.to_string())
            }
            ProviderErrorKind::Other => ApiError::Internal(format!("TTS service error: {}", err)),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg)
            | ApiError::ServiceUnavailable(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request")
            }
            ApiError::Forbidden(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Forbidden")
            }
            ApiError::NotFound(msg) => {
                tracing::debug!(status = status.as_u16(), error = %msg, "Endpoint not found")
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Internal server error")
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Service unavailable")
            }
        }

        let body = ErrorResponse {
            error: self.message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Validation(err) => ApiError::BadRequest(err.to_string()),
            ApplicationError::Provider(err) => ApiError::from_synthesis_failure(err),
        }
    }
}
