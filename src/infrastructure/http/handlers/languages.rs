//! Supported Languages Handler

use axum::Json;

use crate::domain::SUPPORTED_LANGUAGES;
use crate::infrastructure::http::dto::LanguagesResponse;

/// 固定的语言列表
pub async fn supported_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: SUPPORTED_LANGUAGES.iter().copied().collect(),
        total_count: SUPPORTED_LANGUAGES.len(),
    })
}
