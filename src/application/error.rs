//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::ProviderError;
use crate::domain::speech::SpeechError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入验证失败
    #[error(transparent)]
    Validation(#[from] SpeechError),

    /// 外部提供方调用失败
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
