//! Speech Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpeechError {
    #[error("Text is required")]
    EmptyText,

    #[error("Text too long (max {max} characters)")]
    TextTooLong { max: usize },
}
