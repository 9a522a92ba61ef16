//! Data Transfer Objects

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::ports::VoiceDescriptor;

/// POST /tts 请求体，字段均可缺省
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub voice_name: Option<String>,
}

/// GET /voices 查询参数
///
/// 同名参数重复时取第一个值
#[derive(Debug, Default, PartialEq, Eq)]
pub struct VoicesQuery {
    pub language_code: String,
}

impl VoicesQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let language_code = pairs
            .into_iter()
            .find(|(key, _)| key == "language_code")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { language_code }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub tts_available: bool,
}

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<VoiceDescriptor>,
    pub total_count: usize,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: BTreeMap<&'static str, &'static str>,
    pub total_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_voices_query_first_value_wins() {
        let query = VoicesQuery::from_pairs(pairs(&[
            ("other", "x"),
            ("language_code", "fr-FR"),
            ("language_code", "en-US"),
        ]));
        assert_eq!(query.language_code, "fr-FR");
    }

    #[test]
    fn test_voices_query_missing_is_empty() {
        assert_eq!(VoicesQuery::from_pairs(Vec::new()), VoicesQuery::default());
    }
}
