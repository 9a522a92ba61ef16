//! Speech Command Handlers

use std::sync::Arc;

use crate::application::commands::SynthesizeSpeech;
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechSynthesizerPort, SynthesisParams};
use crate::domain::speech::{LanguageCode, SynthesisText, VoiceName};

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechResponse {
    /// MP3 音频
    pub audio: Vec<u8>,
}

/// SynthesizeSpeech Handler
pub struct SynthesizeSpeechHandler {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
}

impl SynthesizeSpeechHandler {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizerPort>) -> Self {
        Self { synthesizer }
    }

    pub async fn handle(
        &self,
        command: SynthesizeSpeech,
    ) -> Result<SynthesizeSpeechResponse, ApplicationError> {
        let text = SynthesisText::new(&command.text)?;
        let language_code = command
            .language_code
            .map(LanguageCode::new)
            .unwrap_or_default();
        let voice_name = command.voice_name.map(VoiceName::new).unwrap_or_default();

        tracing::info!(
            language = %language_code,
            voice = %voice_name,
            text_len = text.char_count(),
            "TTS request"
        );

        let params = SynthesisParams {
            text: text.into_inner(),
            language_code: language_code.as_str().to_string(),
            voice_name: voice_name.as_str().to_string(),
        };

        let audio = self.synthesizer.synthesize(params).await.map_err(|e| {
            tracing::error!(error = %e, kind = ?e.kind, "TTS synthesis failed");
            e
        })?;

        tracing::info!(
            language = %language_code,
            audio_size = audio.len(),
            "TTS synthesis completed"
        );

        Ok(SynthesizeSpeechResponse { audio })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ProviderErrorKind;
    use crate::domain::speech::SpeechError;
    use crate::infrastructure::adapters::{FakeSpeechClient, FakeSpeechClientConfig};

    fn handler_with(fake: Arc<FakeSpeechClient>) -> SynthesizeSpeechHandler {
        SynthesizeSpeechHandler::new(fake)
    }

    #[tokio::test]
    async fn test_defaults_applied() {
        let fake = Arc::new(FakeSpeechClient::new(FakeSpeechClientConfig::default()));
        let handler = handler_with(fake.clone());

        let result = handler
            .handle(SynthesizeSpeech {
                text: "  Hello ".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.audio, FakeSpeechClientConfig::default().audio);
        let last = fake.last_synthesis().unwrap();
        assert_eq!(last.text, "Hello");
        assert_eq!(last.language_code, "en-US");
        assert_eq!(last.voice_name, "en-US-Wavenet-D");
    }

    #[tokio::test]
    async fn test_invalid_text_skips_provider() {
        let fake = Arc::new(FakeSpeechClient::new(FakeSpeechClientConfig::default()));
        let handler = handler_with(fake.clone());

        let err = handler
            .handle(SynthesizeSpeech {
                text: "a".repeat(5001),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Validation(SpeechError::TextTooLong { .. })
        ));
        assert_eq!(fake.synthesize_calls(), 0);
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let fake = Arc::new(FakeSpeechClient::new(FakeSpeechClientConfig {
            failure: Some("403 PERMISSION_DENIED: denied".to_string()),
            ..Default::default()
        }));
        let handler = handler_with(fake.clone());

        let err = handler
            .handle(SynthesizeSpeech {
                text: "hi".to_string(),
                language_code: Some("fr-FR".to_string()),
                voice_name: Some("fr-FR-Wavenet-A".to_string()),
            })
            .await
            .unwrap_err();

        match err {
            ApplicationError::Provider(e) => {
                assert_eq!(e.kind, ProviderErrorKind::PermissionDenied)
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fake.synthesize_calls(), 1);
    }
}
