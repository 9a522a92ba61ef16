//! Google service account 凭据
//!
//! 凭据字段逐个来自环境变量，而不是 JSON 文件。多行私钥存进单行环境变量时
//! 通常以字面量 `\n` 出现，构建时还原为真实换行。

use serde::Serialize;
use thiserror::Error;

pub const PROJECT_ID_VAR: &str = "GOOGLE_CLOUD_PROJECT_ID";
pub const PRIVATE_KEY_ID_VAR: &str = "GOOGLE_CLOUD_PRIVATE_KEY_ID";
pub const PRIVATE_KEY_VAR: &str = "GOOGLE_CLOUD_PRIVATE_KEY";
pub const CLIENT_EMAIL_VAR: &str = "GOOGLE_CLOUD_CLIENT_EMAIL";
pub const CLIENT_ID_VAR: &str = "GOOGLE_CLIENT_ID";
pub const AUTH_URI_VAR: &str = "GOOGLE_AUTH_URI";
pub const TOKEN_URI_VAR: &str = "GOOGLE_TOKEN_URI";
pub const AUTH_PROVIDER_CERT_URL_VAR: &str = "GOOGLE_AUTH_PROVIDER_x509_CERT_URL";
pub const CLIENT_CERT_URL_VAR: &str = "GOOGLE_CLIENT_x509_CERT_URL";
pub const UNIVERSE_DOMAIN_VAR: &str = "GOOGLE_UNIVERSE_DOMAIN";

/// 必填环境变量，空字符串视为缺失
pub const REQUIRED_ENV_VARS: &[&str] = &[PROJECT_ID_VAR, PRIVATE_KEY_VAR, CLIENT_EMAIL_VAR];

/// 未配置 `GOOGLE_TOKEN_URI` 时使用的 OAuth2 token 端点
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// 凭据错误
#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("Missing required environment variables: {0:?}")]
    MissingConfig(Vec<String>),

    #[error("Invalid service account credentials: {0}")]
    Invalid(String),
}

/// Service account 凭据
///
/// 构建后不可变，由 `GoogleTtsClient` 独占
#[derive(Clone, Serialize)]
pub struct GoogleCredentials {
    #[serde(rename = "type")]
    account_type: &'static str,
    pub project_id: String,
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    pub client_id: Option<String>,
    pub auth_uri: Option<String>,
    pub token_uri: Option<String>,
    pub auth_provider_x509_cert_url: Option<String>,
    pub client_x509_cert_url: Option<String>,
    pub universe_domain: Option<String>,
}

impl std::fmt::Debug for GoogleCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleCredentials")
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"<redacted>")
            .field("client_email", &self.client_email)
            .field("client_id", &self.client_id)
            .field("token_uri", &self.token_uri)
            .field("universe_domain", &self.universe_domain)
            .finish()
    }
}

impl GoogleCredentials {
    /// 从进程环境变量构建
    pub fn from_env() -> Result<Self, CredentialsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 通过任意查找函数构建（测试中替代真实环境）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let missing: Vec<String> = REQUIRED_ENV_VARS
            .iter()
            .copied()
            .filter(|&name| required(name).is_none())
            .map(String::from)
            .collect();
        if !missing.is_empty() {
            return Err(CredentialsError::MissingConfig(missing));
        }

        let project_id = required(PROJECT_ID_VAR).unwrap_or_default();
        let private_key = required(PRIVATE_KEY_VAR)
            .map(|key| unescape_newlines(&key))
            .unwrap_or_default();
        let client_email = required(CLIENT_EMAIL_VAR).unwrap_or_default();

        Ok(Self {
            account_type: "service_account",
            project_id,
            private_key_id: lookup(PRIVATE_KEY_ID_VAR),
            private_key,
            client_email,
            client_id: lookup(CLIENT_ID_VAR),
            auth_uri: lookup(AUTH_URI_VAR),
            token_uri: lookup(TOKEN_URI_VAR),
            auth_provider_x509_cert_url: lookup(AUTH_PROVIDER_CERT_URL_VAR),
            client_x509_cert_url: lookup(CLIENT_CERT_URL_VAR),
            universe_domain: lookup(UNIVERSE_DOMAIN_VAR),
        })
    }

    /// 序列化为 service account key JSON
    ///
    /// token 端点缺失时补上默认值，其余可选字段原样输出
    pub fn to_service_account_json(&self) -> Result<String, CredentialsError> {
        let mut value =
            serde_json::to_value(self).map_err(|e| CredentialsError::Invalid(e.to_string()))?;
        if self.token_uri.is_none() {
            value["token_uri"] = serde_json::Value::String(DEFAULT_TOKEN_URI.to_string());
        }
        Ok(value.to_string())
    }
}

/// 将字面量 `\n` 替换为换行符
fn unescape_newlines(value: &str) -> String {
    value.replace("\\n", "\n")
}
