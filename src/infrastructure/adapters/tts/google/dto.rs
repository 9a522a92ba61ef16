//! Google TTS REST 请求/响应结构

use serde::{Deserialize, Serialize};

use crate::application::ports::VoiceDescriptor;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SynthesizeRequest<'a> {
    pub input: SynthesisInput<'a>,
    pub voice: VoiceSelectionParams<'a>,
    pub audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
pub(super) struct SynthesisInput<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VoiceSelectionParams<'a> {
    pub language_code: &'a str,
    pub name: &'a str,
}

/// 固定音频参数：MP3，语速/音高/增益均为中性值
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AudioConfig {
    pub audio_encoding: &'static str,
    pub speaking_rate: f32,
    pub pitch: f32,
    pub volume_gain_db: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            audio_encoding: "MP3",
            speaking_rate: 1.0,
            pitch: 0.0,
            volume_gain_db: 0.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SynthesizeResponse {
    /// base64 编码的音频
    pub audio_content: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ListVoicesResponse {
    #[serde(default)]
    pub voices: Vec<Voice>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Voice {
    #[serde(default)]
    pub language_codes: Vec<String>,
    pub name: String,
    #[serde(default = "unspecified_gender")]
    pub ssml_gender: String,
    #[serde(default)]
    pub natural_sample_rate_hertz: u32,
}

fn unspecified_gender() -> String {
    "SSML_VOICE_GENDER_UNSPECIFIED".to_string()
}

impl From<Voice> for VoiceDescriptor {
    fn from(voice: Voice) -> Self {
        Self {
            name: voice.name,
            language_codes: voice.language_codes,
            ssml_gender: voice.ssml_gender,
            natural_sample_rate_hertz: voice.natural_sample_rate_hertz,
        }
    }
}

/// Google API 错误包装 `{"error": {...}}`
#[derive(Debug, Deserialize)]
pub(super) struct ErrorEnvelope {
    pub error: ErrorStatus,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorStatus {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}
