//! Command Handlers 实现

mod speech_handlers;

pub use speech_handlers::*;
