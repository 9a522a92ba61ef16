//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod speech_synthesizer;

pub use speech_synthesizer::{
    ProviderError, ProviderErrorKind, SpeechSynthesizerPort, SynthesisParams, VoiceDescriptor,
    PROVIDER_ERROR_PATTERNS,
};
