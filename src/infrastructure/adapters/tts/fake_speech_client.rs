//! Fake Speech Client - 用于测试的语音合成客户端
//!
//! 返回固定音频与固定音色目录，不调用外部服务

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{
    ProviderError, SpeechSynthesizerPort, SynthesisParams, VoiceDescriptor,
};

/// Fake Speech Client 配置
#[derive(Debug, Clone)]
pub struct FakeSpeechClientConfig {
    /// 固定返回的音频
    pub audio: Vec<u8>,
    /// 音色目录
    pub voices: Vec<VoiceDescriptor>,
    /// 设置后所有调用都以该消息失败
    pub failure: Option<String>,
    /// 合成前的模拟延迟
    pub latency: Duration,
}

impl Default for FakeSpeechClientConfig {
    fn default() -> Self {
        Self {
            audio: b"ID3\x04\x00fake-mp3-frames".to_vec(),
            voices: vec![
                voice("en-US-Wavenet-D", &["en-US"], "MALE"),
                voice("en-GB-Neural2-B", &["en-GB"], "MALE"),
                voice("fr-FR-Wavenet-A", &["fr-FR"], "FEMALE"),
                voice("fr-CA-Standard-A", &["fr-CA"], "FEMALE"),
            ],
            failure: None,
            latency: Duration::ZERO,
        }
    }
}

fn voice(name: &str, language_codes: &[&str], gender: &str) -> VoiceDescriptor {
    VoiceDescriptor {
        name: name.to_string(),
        language_codes: language_codes.iter().map(|c| c.to_string()).collect(),
        ssml_gender: gender.to_string(),
        natural_sample_rate_hertz: 24000,
    }
}

/// Fake Speech Client
///
/// 记录调用次数和最后一次合成参数，便于断言
pub struct FakeSpeechClient {
    config: FakeSpeechClientConfig,
    synthesize_calls: AtomicUsize,
    list_voices_calls: AtomicUsize,
    last_synthesis: Mutex<Option<SynthesisParams>>,
}

impl FakeSpeechClient {
    pub fn new(config: FakeSpeechClientConfig) -> Self {
        Self {
            config,
            synthesize_calls: AtomicUsize::new(0),
            list_voices_calls: AtomicUsize::new(0),
            last_synthesis: Mutex::new(None),
        }
    }

    /// 所有调用都以 `message` 失败
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(FakeSpeechClientConfig {
            failure: Some(message.into()),
            ..Default::default()
        })
    }

    pub fn synthesize_calls(&self) -> usize {
        self.synthesize_calls.load(Ordering::SeqCst)
    }

    pub fn list_voices_calls(&self) -> usize {
        self.list_voices_calls.load(Ordering::SeqCst)
    }

    pub fn last_synthesis(&self) -> Option<SynthesisParams> {
        self.last_synthesis
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }

    fn check_failure(&self) -> Result<(), ProviderError> {
        match &self.config.failure {
            Some(message) => Err(ProviderError::new(message.clone())),
            None => Ok(()),
        }
    }
}

/// `fr` 匹配 `fr-FR`、`fr-CA`；`fr-FR` 只匹配自身
fn matches_language(voice: &VoiceDescriptor, filter: &str) -> bool {
    filter.is_empty()
        || voice.language_codes.iter().any(|code| {
            code.eq_ignore_ascii_case(filter)
                || code
                    .to_ascii_lowercase()
                    .starts_with(&format!("{}-", filter.to_ascii_lowercase()))
        })
}

#[async_trait]
impl SpeechSynthesizerPort for FakeSpeechClient {
    async fn synthesize(&self, params: SynthesisParams) -> Result<Vec<u8>, ProviderError> {
        self.synthesize_calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            text_len = params.text.len(),
            language = %params.language_code,
            voice = %params.voice_name,
            "FakeSpeechClient: returning fixed audio"
        );
        if let Ok(mut last) = self.last_synthesis.lock() {
            *last = Some(params);
        }
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
        self.check_failure()?;
        Ok(self.config.audio.clone())
    }

    async fn list_voices(
        &self,
        language_code: &str,
    ) -> Result<Vec<VoiceDescriptor>, ProviderError> {
        self.list_voices_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self
            .config
            .voices
            .iter()
            .filter(|v| matches_language(v, language_code))
            .cloned()
            .collect())
    }
}
