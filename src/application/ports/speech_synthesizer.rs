//! Speech Synthesizer Port - 语音合成提供方抽象
//!
//! 定义外部 TTS 提供方的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// 提供方错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    PermissionDenied,
    InvalidArgument,
    Unimplemented,
    Other,
}

/// 错误消息子串 -> 分类
///
/// 按顺序匹配，首个命中生效。依赖提供方错误文案中的 canonical status 名称，
/// 提供方改变措辞时分类会退化为 `Other`。
pub const PROVIDER_ERROR_PATTERNS: &[(&str, ProviderErrorKind)] = &[
    ("PERMISSION_DENIED", ProviderErrorKind::PermissionDenied),
    ("INVALID_ARGUMENT", ProviderErrorKind::InvalidArgument),
    ("UNIMPLEMENTED", ProviderErrorKind::Unimplemented),
];

impl ProviderErrorKind {
    /// 根据错误消息分类
    pub fn classify(message: &str) -> Self {
        PROVIDER_ERROR_PATTERNS
            .iter()
            .find(|(pattern, _)| message.contains(pattern))
            .map(|(_, kind)| *kind)
            .unwrap_or(ProviderErrorKind::Other)
    }
}

/// 外部提供方调用失败
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    /// 创建错误，分类由消息内容决定
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: ProviderErrorKind::classify(&message),
            message,
        }
    }
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisParams {
    pub text: String,
    pub language_code: String,
    pub voice_name: String,
}

/// 提供方音色目录条目，原样返回给调用方
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceDescriptor {
    pub name: String,
    pub language_codes: Vec<String>,
    pub ssml_gender: String,
    pub natural_sample_rate_hertz: u32,
}

/// Speech Synthesizer Port
///
/// 进程内唯一、构造后只读，可被并发请求共享
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 合成语音，返回 MP3 编码的音频字节
    async fn synthesize(&self, params: SynthesisParams) -> Result<Vec<u8>, ProviderError>;

    /// 列出音色，`language_code` 为空表示不过滤
    async fn list_voices(&self, language_code: &str)
        -> Result<Vec<VoiceDescriptor>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_statuses() {
        assert_eq!(
            ProviderErrorKind::classify("403 PERMISSION_DENIED: API not enabled"),
            ProviderErrorKind::PermissionDenied
        );
        assert_eq!(
            ProviderErrorKind::classify("400 INVALID_ARGUMENT: voice does not exist"),
            ProviderErrorKind::InvalidArgument
        );
        assert_eq!(
            ProviderErrorKind::classify("501 UNIMPLEMENTED: method not found"),
            ProviderErrorKind::Unimplemented
        );
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(
            ProviderErrorKind::classify("500 INTERNAL: backend error"),
            ProviderErrorKind::Other
        );
        assert_eq!(ProviderErrorKind::classify(""), ProviderErrorKind::Other);
        // 大小写敏感
        assert_eq!(
            ProviderErrorKind::classify("permission_denied"),
            ProviderErrorKind::Other
        );
    }

    #[test]
    fn test_classify_first_pattern_wins() {
        assert_eq!(
            ProviderErrorKind::classify("INVALID_ARGUMENT after PERMISSION_DENIED"),
            ProviderErrorKind::PermissionDenied
        );
    }

    #[test]
    fn test_provider_error_display_is_message() {
        let err = ProviderError::new("503 UNAVAILABLE: try later");
        assert_eq!(err.to_string(), "503 UNAVAILABLE: try later");
        assert_eq!(err.kind, ProviderErrorKind::Other);
    }
}
