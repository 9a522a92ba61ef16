//! HTTP Middleware
//!
//! HTTP 状态码错误日志中间件，以及空错误体补全

use std::time::Instant;

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::error::{ErrorResponse, METHOD_NOT_ALLOWED, REQUEST_TIMEOUT};

/// 当状态码为 4xx 或 5xx 时记录日志，附带耗时
///
/// 业务错误的具体原因在 ApiError::into_response() 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    }

    response
}

/// 为框架层产生的 4xx/5xx（超时 408、方法不匹配 405 等）补上 `{"error": ...}` 响应体
///
/// 已带 Content-Type 的响应视为业务层已处理，原样返回
pub async fn json_error_body_middleware(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error())
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    let message = match status {
        StatusCode::REQUEST_TIMEOUT => REQUEST_TIMEOUT.to_string(),
        StatusCode::METHOD_NOT_ALLOWED => METHOD_NOT_ALLOWED.to_string(),
        other => other.canonical_reason().unwrap_or("Error").to_string(),
    };

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut replaced = (status, Json(ErrorResponse { error: message })).into_response();
    if let Some(allow) = allow {
        replaced.headers_mut().insert(header::ALLOW, allow);
    }
    replaced
}
