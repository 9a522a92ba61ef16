//! Voices Handler

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::application::ListProviderVoices;
use crate::infrastructure::http::dto::{VoicesQuery, VoicesResponse};
use crate::infrastructure::http::error::{ApiError, TTS_NOT_AVAILABLE};
use crate::infrastructure::http::state::AppState;

/// GET /voices?language_code=xx-XX
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<VoicesResponse>, ApiError> {
    let handler = state
        .list_voices_handler
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable(TTS_NOT_AVAILABLE.to_string()))?;

    let query = match query {
        Ok(Query(pairs)) => VoicesQuery::from_pairs(pairs),
        Err(e) => {
            tracing::debug!(error = %e.body_text(), "Unparseable voices query, listing all voices");
            VoicesQuery::default()
        }
    };

    let voices = handler
        .handle(ListProviderVoices {
            language_code: query.language_code,
        })
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to list voices: {}", e)))?;

    Ok(Json(VoicesResponse {
        total_count: voices.len(),
        voices,
    }))
}
