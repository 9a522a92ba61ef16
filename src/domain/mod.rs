//! Domain Layer - 领域层
//!
//! - Speech Context: 合成文本与音色选择
//! - 支持语言的固定列表

pub mod languages;
pub mod speech;

pub use languages::SUPPORTED_LANGUAGES;
