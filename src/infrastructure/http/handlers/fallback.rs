//! 未匹配路由

use crate::infrastructure::http::error::{ApiError, ENDPOINT_NOT_FOUND};

pub async fn not_found() -> ApiError {
    ApiError::NotFound(ENDPOINT_NOT_FOUND.to_string())
}
