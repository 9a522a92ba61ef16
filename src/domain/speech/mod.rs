//! Speech Context - 语音合成上下文

mod errors;
mod value_objects;

pub use errors::SpeechError;
pub use value_objects::{
    LanguageCode, SynthesisText, VoiceName, DEFAULT_LANGUAGE_CODE, DEFAULT_VOICE_NAME,
    MAX_TEXT_CHARS,
};
