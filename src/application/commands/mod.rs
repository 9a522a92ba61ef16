//! 应用层 - 命令（写操作）

mod speech_commands;

pub mod handlers;

pub use speech_commands::*;
