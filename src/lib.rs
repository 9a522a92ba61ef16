//! TTS API - Google Cloud Text-to-Speech HTTP 代理
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Speech Context: 合成文本校验、语言/音色默认值
//! - 固定的支持语言列表
//!
//! 应用层 (application/):
//! - Ports: SpeechSynthesizer 端口
//! - Commands / Queries: 合成与音色查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON + 音频 API
//! - Adapters: Google TTS 客户端、测试用 Fake 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
