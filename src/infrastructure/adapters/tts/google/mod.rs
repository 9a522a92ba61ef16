//! Google Cloud Text-to-Speech
//!
//! - credentials: 从环境变量组装 service account 凭据
//! - auth: access token 来源
//! - client: REST 客户端（v1 `text:synthesize` / `voices`）

mod auth;
mod client;
mod credentials;
mod dto;

pub use client::{GoogleTtsClient, GoogleTtsClientConfig};
pub use credentials::{CredentialsError, GoogleCredentials, REQUIRED_ENV_VARS};
