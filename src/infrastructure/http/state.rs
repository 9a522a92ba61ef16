//! Application State
//!
//! 合成客户端作为显式注入的依赖；凭据缺失时为 `None`，服务以降级模式运行

use std::sync::Arc;

use crate::application::{ListProviderVoicesHandler, SpeechSynthesizerPort, SynthesizeSpeechHandler};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub synthesizer: Option<Arc<dyn SpeechSynthesizerPort>>,

    // ========== Handlers ==========
    pub synthesize_handler: Option<SynthesizeSpeechHandler>,
    pub list_voices_handler: Option<ListProviderVoicesHandler>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(synthesizer: Option<Arc<dyn SpeechSynthesizerPort>>) -> Self {
        Self {
            synthesize_handler: synthesizer.clone().map(SynthesizeSpeechHandler::new),
            list_voices_handler: synthesizer.clone().map(ListProviderVoicesHandler::new),
            synthesizer,
        }
    }

    /// 降级模式（无合成客户端）
    pub fn degraded() -> Self {
        Self::new(None)
    }

    pub fn tts_available(&self) -> bool {
        self.synthesizer.is_some()
    }
}
