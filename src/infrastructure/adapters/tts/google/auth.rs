//! Access token 获取
//!
//! 默认由 service account 通过 `gcp_auth` 换取 OAuth2 token

use async_trait::async_trait;
use gcp_auth::{CustomServiceAccount, TokenProvider as _};

use crate::application::ports::ProviderError;

const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Bearer token 来源
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn get_token(&self) -> Result<String, ProviderError>;
}

/// service account -> cloud-platform scope token，缓存和刷新由 `gcp_auth` 负责
pub struct ServiceAccountTokenProvider {
    account: CustomServiceAccount,
}

impl ServiceAccountTokenProvider {
    pub fn new(account: CustomServiceAccount) -> Self {
        Self { account }
    }
}

#[async_trait]
impl AccessTokenProvider for ServiceAccountTokenProvider {
    async fn get_token(&self) -> Result<String, ProviderError> {
        let token = self
            .account
            .token(&[CLOUD_PLATFORM_SCOPE])
            .await
            .map_err(|e| ProviderError::new(format!("Failed to obtain access token: {}", e)))?;
        Ok(token.as_str().to_string())
    }
}
