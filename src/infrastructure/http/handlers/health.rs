//! Health Handler

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::infrastructure::http::dto::HealthResponse;
use crate::infrastructure::http::state::AppState;

/// 健康检查，始终 200；`tts_available` 反映合成客户端是否构建成功
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "TTS API",
        tts_available: state.tts_available(),
    })
}
