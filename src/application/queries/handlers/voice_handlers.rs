//! Voice Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechSynthesizerPort, VoiceDescriptor};
use crate::application::queries::ListProviderVoices;

/// ListProviderVoices Handler
pub struct ListProviderVoicesHandler {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
}

impl ListProviderVoicesHandler {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizerPort>) -> Self {
        Self { synthesizer }
    }

    pub async fn handle(
        &self,
        query: ListProviderVoices,
    ) -> Result<Vec<VoiceDescriptor>, ApplicationError> {
        let voices = self
            .synthesizer
            .list_voices(&query.language_code)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, language = %query.language_code, "Error listing voices");
                e
            })?;

        tracing::debug!(
            language = %query.language_code,
            count = voices.len(),
            "Voices listed"
        );

        Ok(voices)
    }
}
