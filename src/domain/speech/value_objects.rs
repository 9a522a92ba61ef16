//! Speech Context - Value Objects

use super::SpeechError;

/// 单次合成允许的最大字符数（按 Unicode 标量计数）
pub const MAX_TEXT_CHARS: usize = 5000;

/// 默认语言
pub const DEFAULT_LANGUAGE_CODE: &str = "en-US";

/// 默认音色
pub const DEFAULT_VOICE_NAME: &str = "en-US-Wavenet-D";

/// 待合成文本
///
/// 不变量:
/// - 去除首尾空白后非空
/// - 去除首尾空白后不超过 `MAX_TEXT_CHARS` 个字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisText(String);

impl SynthesisText {
    pub fn new(raw: &str) -> Result<Self, SpeechError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(SpeechError::EmptyText);
        }
        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(SpeechError::TextTooLong {
                max: MAX_TEXT_CHARS,
            });
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 字符数
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// 语言代码（BCP-47，如 `en-US`），原样透传给提供方
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE_CODE.to_string())
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 提供方音色名称（如 `en-US-Wavenet-D`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceName(String);

impl VoiceName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VoiceName {
    fn default() -> Self {
        Self(DEFAULT_VOICE_NAME.to_string())
    }
}

impl std::fmt::Display for VoiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
