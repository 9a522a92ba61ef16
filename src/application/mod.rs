//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechSynthesizer）
//! - commands: 合成命令及处理器
//! - queries: 音色查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    handlers::{SynthesizeSpeechHandler, SynthesizeSpeechResponse},
    SynthesizeSpeech,
};

pub use error::ApplicationError;

pub use ports::{
    ProviderError, ProviderErrorKind, SpeechSynthesizerPort, SynthesisParams, VoiceDescriptor,
};

pub use queries::{handlers::ListProviderVoicesHandler, ListProviderVoices};
