//! Google TTS Client - 调用 Google Cloud Text-to-Speech REST API
//!
//! 实现 SpeechSynthesizerPort trait
//!
//! - POST {base_url}/v1/text:synthesize
//! - GET  {base_url}/v1/voices?languageCode=...

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gcp_auth::CustomServiceAccount;
use reqwest::{Client, Response, StatusCode};

use super::auth::{AccessTokenProvider, ServiceAccountTokenProvider};
use super::credentials::{CredentialsError, GoogleCredentials};
use super::dto::{
    AudioConfig, ErrorEnvelope, ListVoicesResponse, SynthesisInput, SynthesizeRequest,
    SynthesizeResponse, VoiceSelectionParams,
};
use crate::application::ports::{
    ProviderError, SpeechSynthesizerPort, SynthesisParams, VoiceDescriptor,
};

/// Google TTS 客户端配置
#[derive(Debug, Clone)]
pub struct GoogleTtsClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for GoogleTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://texttospeech.googleapis.com".to_string(),
            timeout_secs: 60,
        }
    }
}

impl GoogleTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google TTS 客户端
///
/// 进程启动时构建一次，之后只读
pub struct GoogleTtsClient {
    http: Client,
    auth: Arc<dyn AccessTokenProvider>,
    config: GoogleTtsClientConfig,
}

impl GoogleTtsClient {
    /// 使用 service account 凭据创建客户端
    ///
    /// 私钥无法解析时返回 `CredentialsError::Invalid`
    pub fn new(
        credentials: GoogleCredentials,
        config: GoogleTtsClientConfig,
    ) -> Result<Self, CredentialsError> {
        let key_json = credentials.to_service_account_json()?;
        let account = CustomServiceAccount::from_json(&key_json)
            .map_err(|e| CredentialsError::Invalid(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CredentialsError::Invalid(format!("Failed to build HTTP client: {}", e)))?;

        tracing::info!(
            project_id = %credentials.project_id,
            client_email = %credentials.client_email,
            base_url = %config.base_url,
            "Google Cloud Text-to-Speech client initialized"
        );

        Ok(Self::from_parts(
            http,
            Arc::new(ServiceAccountTokenProvider::new(account)),
            config,
        ))
    }

    /// 由已构建的 HTTP 客户端和 token 来源组装
    pub(crate) fn from_parts(
        http: Client,
        auth: Arc<dyn AccessTokenProvider>,
        config: GoogleTtsClientConfig,
    ) -> Self {
        Self { http, auth, config }
    }

    fn synthesize_url(&self) -> String {
        format!("{}/v1/text:synthesize", self.config.base_url.trim_end_matches('/'))
    }

    fn voices_url(&self) -> String {
        format!("{}/v1/voices", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SpeechSynthesizerPort for GoogleTtsClient {
    async fn synthesize(&self, params: SynthesisParams) -> Result<Vec<u8>, ProviderError> {
        let token = self.auth.get_token().await?;

        let request = SynthesizeRequest {
            input: SynthesisInput { text: &params.text },
            voice: VoiceSelectionParams {
                language_code: &params.language_code,
                name: &params.voice_name,
            },
            audio_config: AudioConfig::default(),
        };

        tracing::debug!(
            url = %self.synthesize_url(),
            language = %params.language_code,
            voice = %params.voice_name,
            "Sending synthesize request"
        );

        let response = self
            .http
            .post(self.synthesize_url())
            .bearer_auth(&token)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response).await?;

        let body: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::new(format!("Invalid synthesize response: {}", e)))?;

        STANDARD
            .decode(body.audio_content)
            .map_err(|e| ProviderError::new(format!("Invalid audio content: {}", e)))
    }

    async fn list_voices(
        &self,
        language_code: &str,
    ) -> Result<Vec<VoiceDescriptor>, ProviderError> {
        let token = self.auth.get_token().await?;

        let mut request = self.http.get(self.voices_url()).bearer_auth(&token);
        if !language_code.is_empty() {
            request = request.query(&[("languageCode", language_code)]);
        }

        let response = request.send().await.map_err(transport_error)?;
        let response = ensure_success(response).await?;

        let body: ListVoicesResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::new(format!("Invalid voices response: {}", e)))?;

        Ok(body.voices.into_iter().map(VoiceDescriptor::from).collect())
    }
}

fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::new(format!("Request to speech provider timed out: {}", e))
    } else if e.is_connect() {
        ProviderError::new(format!("Cannot connect to speech provider: {}", e))
    } else {
        ProviderError::new(e.to_string())
    }
}

async fn ensure_success(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(provider_error_from_body(status, &body))
}

/// 将非 2xx 响应转换为错误
///
/// 消息格式 `"{code} {STATUS}: {message}"`，保留 Google canonical status 名称，
/// 供 `ProviderErrorKind::classify` 匹配
fn provider_error_from_body(status: StatusCode, body: &str) -> ProviderError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let code = if envelope.error.code == 0 {
                status.as_u16()
            } else {
                envelope.error.code
            };
            ProviderError::new(format!(
                "{} {}: {}",
                code, envelope.error.status, envelope.error.message
            ))
        }
        Err(_) => ProviderError::new(format!("HTTP {}: {}", status, body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use axum::{
        extract::State,
        http::{header, HeaderMap, Method, StatusCode as StubStatus, Uri},
        response::IntoResponse,
    };

    use crate::application::ports::ProviderErrorKind;

    #[test]
    fn test_config_default() {
        let config = GoogleTtsClientConfig::default();
        assert_eq!(config.base_url, "https://texttospeech.googleapis.com");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_config_builder() {
        let config = GoogleTtsClientConfig::new("http://localhost:9000").with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_error_envelope_keeps_status_name() {
        let body = r#"{"error": {"code": 403, "message": "Cloud Text-to-Speech API has not been used", "status": "PERMISSION_DENIED"}}"#;
        let err = provider_error_from_body(StatusCode::FORBIDDEN, body);
        assert_eq!(
            err.message,
            "403 PERMISSION_DENIED: Cloud Text-to-Speech API has not been used"
        );
        assert_eq!(err.kind, ProviderErrorKind::PermissionDenied);
    }

    #[test]
    fn test_invalid_argument_envelope() {
        let body = r#"{"error": {"code": 400, "message": "Voice 'xx' does not exist.", "status": "INVALID_ARGUMENT"}}"#;
        let err = provider_error_from_body(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.kind, ProviderErrorKind::InvalidArgument);
    }

    #[test]
    fn test_non_json_error_body() {
        let err = provider_error_from_body(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.message, "HTTP 502 Bad Gateway: upstream down");
        assert_eq!(err.kind, ProviderErrorKind::Other);
    }

    // ========== 本地 stub 上的请求路径 ==========

    #[derive(Debug, Clone)]
    struct Captured {
        method: Method,
        path: String,
        query: Option<String>,
        authorization: Option<String>,
        body: String,
    }

    #[derive(Clone)]
    struct Stub {
        status: StubStatus,
        body: String,
        captured: Arc<Mutex<Vec<Captured>>>,
    }

    async fn record(
        State(stub): State<Stub>,
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        body: String,
    ) -> axum::response::Response {
        stub.captured.lock().unwrap().push(Captured {
            method,
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            authorization: headers
                .get(header::AUTHORIZATION)
                .map(|v| v.to_str().unwrap().to_string()),
            body,
        });
        (
            stub.status,
            [(header::CONTENT_TYPE, "application/json")],
            stub.body.clone(),
        )
            .into_response()
    }

    async fn spawn_stub(
        status: StubStatus,
        body: impl Into<String>,
    ) -> (String, Arc<Mutex<Vec<Captured>>>) {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let stub = Stub {
            status,
            body: body.into(),
            captured: captured.clone(),
        };
        let app = axum::Router::new().fallback(record).with_state(stub);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), captured)
    }

    struct StaticToken(&'static str);

    #[async_trait]
    impl AccessTokenProvider for StaticToken {
        async fn get_token(&self) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    struct RevokedToken;

    #[async_trait]
    impl AccessTokenProvider for RevokedToken {
        async fn get_token(&self) -> Result<String, ProviderError> {
            Err(ProviderError::new("Failed to obtain access token: revoked"))
        }
    }

    fn client_for(base_url: &str, auth: Arc<dyn AccessTokenProvider>) -> GoogleTtsClient {
        let http = Client::builder().no_proxy().build().unwrap();
        GoogleTtsClient::from_parts(http, auth, GoogleTtsClientConfig::new(base_url).with_timeout(5))
    }

    fn params() -> SynthesisParams {
        SynthesisParams {
            text: "Bonjour".to_string(),
            language_code: "fr-FR".to_string(),
            voice_name: "fr-FR-Wavenet-A".to_string(),
        }
    }

    #[tokio::test]
    async fn test_synthesize_sends_bearer_request_and_decodes_audio() {
        let audio = b"ID3\x04\x00mp3-bytes".to_vec();
        let body = format!(r#"{{"audioContent":"{}"}}"#, STANDARD.encode(&audio));
        let (base_url, captured) = spawn_stub(StubStatus::OK, body).await;
        let client = client_for(&base_url, Arc::new(StaticToken("test-token")));

        let decoded = client.synthesize(params()).await.unwrap();
        assert_eq!(decoded, audio);

        let requests = captured.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/v1/text:synthesize");
        assert_eq!(request.authorization.as_deref(), Some("Bearer test-token"));

        let json: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(json["input"]["text"], "Bonjour");
        assert_eq!(json["voice"]["languageCode"], "fr-FR");
        assert_eq!(json["voice"]["name"], "fr-FR-Wavenet-A");
        assert_eq!(json["audioConfig"]["audioEncoding"], "MP3");
        assert_eq!(json["audioConfig"]["speakingRate"], 1.0);
    }

    #[tokio::test]
    async fn test_list_voices_language_filter_in_query() {
        let body = r#"{"voices":[{"languageCodes":["fr-FR"],"name":"fr-FR-Wavenet-A","ssmlGender":"FEMALE","naturalSampleRateHertz":24000}]}"#;
        let (base_url, captured) = spawn_stub(StubStatus::OK, body).await;
        let client = client_for(&base_url, Arc::new(StaticToken("test-token")));

        let voices = client.list_voices("").await.unwrap();
        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].name, "fr-FR-Wavenet-A");
        assert_eq!(voices[0].language_codes, vec!["fr-FR".to_string()]);
        assert_eq!(voices[0].ssml_gender, "FEMALE");
        assert_eq!(voices[0].natural_sample_rate_hertz, 24000);

        client.list_voices("fr-FR").await.unwrap();

        let requests = captured.lock().unwrap().clone();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].path, "/v1/voices");
        assert_eq!(requests[0].query, None);
        assert_eq!(requests[0].authorization.as_deref(), Some("Bearer test-token"));
        assert_eq!(requests[1].query.as_deref(), Some("languageCode=fr-FR"));
    }

    #[tokio::test]
    async fn test_error_status_classified() {
        let body = r#"{"error":{"code":403,"message":"Cloud Text-to-Speech API has not been used","status":"PERMISSION_DENIED"}}"#;
        let (base_url, _captured) = spawn_stub(StubStatus::FORBIDDEN, body).await;
        let client = client_for(&base_url, Arc::new(StaticToken("test-token")));

        let err = client.synthesize(params()).await.unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::PermissionDenied);
        assert_eq!(
            err.message,
            "403 PERMISSION_DENIED: Cloud Text-to-Speech API has not been used"
        );

        let err = client.list_voices("en-US").await.unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::PermissionDenied);
    }

    #[tokio::test]
    async fn test_token_failure_sends_nothing() {
        let (base_url, captured) = spawn_stub(StubStatus::OK, "{}").await;
        let client = client_for(&base_url, Arc::new(RevokedToken));

        let err = client.synthesize(params()).await.unwrap_err();
        assert_eq!(err.message, "Failed to obtain access token: revoked");
        assert!(client.list_voices("").await.is_err());
        assert!(captured.lock().unwrap().is_empty());
    }
}
