//! TTS Adapter - 语音合成提供方实现

mod fake_speech_client;
pub mod google;

pub use fake_speech_client::{FakeSpeechClient, FakeSpeechClientConfig};
pub use google::{CredentialsError, GoogleCredentials, GoogleTtsClient, GoogleTtsClientConfig};
