//! Voice Queries

/// 列出提供方音色，`language_code` 为空表示全部
#[derive(Debug, Clone, Default)]
pub struct ListProviderVoices {
    pub language_code: String,
}
