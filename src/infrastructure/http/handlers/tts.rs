//! TTS Handler - 文本转语音

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::application::SynthesizeSpeech;
use crate::infrastructure::http::dto::TtsRequest;
use crate::infrastructure::http::error::{ApiError, NO_JSON_DATA, TTS_NOT_CONFIGURED};
use crate::infrastructure::http::state::AppState;

/// POST /tts
///
/// 检查顺序：客户端可用 -> JSON 请求体 -> 文本校验 -> 合成。
/// 成功时返回 MP3，inline 展示而非下载。
pub async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let handler = state
        .synthesize_handler
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable(TTS_NOT_CONFIGURED.to_string()))?;

    let body = match payload {
        Ok(Json(Value::Object(map))) if !map.is_empty() => map,
        Ok(_) => return Err(ApiError::BadRequest(NO_JSON_DATA.to_string())),
        Err(rejection) => {
            tracing::debug!(rejection = %rejection, "Rejected TTS request body");
            return Err(ApiError::BadRequest(NO_JSON_DATA.to_string()));
        }
    };

    let request: TtsRequest = serde_json::from_value(Value::Object(body))
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))?;

    let result = handler
        .handle(SynthesizeSpeech {
            text: request.text.unwrap_or_default(),
            language_code: request.language_code,
            voice_name: request.voice_name,
        })
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (header::CONTENT_DISPOSITION, "inline; filename=\"speech.mp3\""),
        ],
        result.audio,
    )
        .into_response())
}
