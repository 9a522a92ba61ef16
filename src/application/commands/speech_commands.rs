//! Speech Commands

/// 合成语音命令
///
/// `language_code` / `voice_name` 缺省时使用默认值
#[derive(Debug, Clone, Default)]
pub struct SynthesizeSpeech {
    pub text: String,
    pub language_code: Option<String>,
    pub voice_name: Option<String>,
}
