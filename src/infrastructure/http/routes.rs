//! HTTP Routes
//!
//! API Endpoints:
//! - /health               GET   健康检查
//! - /tts                  POST  文本转语音（audio/mpeg）
//! - /voices               GET   提供方音色列表（可按 language_code 过滤）
//! - /supported-languages  GET   固定语言列表
//! - 其他                        404

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/tts", post(handlers::text_to_speech))
        .route("/voices", get(handlers::list_voices))
        .route("/supported-languages", get(handlers::supported_languages))
        .fallback(handlers::not_found)
}
