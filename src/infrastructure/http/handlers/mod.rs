//! HTTP Handlers

mod fallback;
mod health;
mod languages;
mod tts;
mod voices;

pub use fallback::*;
pub use health::*;
pub use languages::*;
pub use tts::*;
pub use voices::*;
