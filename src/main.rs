//! TTS API - Google Cloud Text-to-Speech HTTP 代理
//!
//! 凭据缺失或无效时服务仍然启动，合成相关接口返回 503

use std::sync::Arc;

use tts_api::application::SpeechSynthesizerPort;
use tts_api::config::{load_config, print_config, AppConfig};
use tts_api::infrastructure::adapters::{
    CredentialsError, GoogleCredentials, GoogleTtsClient, GoogleTtsClientConfig,
};
use tts_api::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：PORT > 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("TTS API - Google Cloud Text-to-Speech");
    print_config(&config);

    let synthesizer = create_synthesizer(&config);
    let state = AppState::new(synthesizer);
    if !state.tts_available() {
        tracing::warn!("Text-to-Speech client unavailable, /tts and /voices will return 503");
    }

    let port = config
        .server
        .port
        .ok_or_else(|| anyhow::anyhow!("PORT environment variable is required"))?;
    let server_config = ServerConfig::new(&config.server.host, port)
        .with_request_timeout(config.server.request_timeout_secs)
        .with_max_body_bytes(config.server.max_body_bytes);

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},tts_api={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 从环境变量构建 Google TTS 客户端，失败时返回 None（降级模式）
fn create_synthesizer(config: &AppConfig) -> Option<Arc<dyn SpeechSynthesizerPort>> {
    let client_config =
        GoogleTtsClientConfig::new(&config.tts.base_url).with_timeout(config.tts.timeout_secs);

    let result = GoogleCredentials::from_env()
        .and_then(|credentials| GoogleTtsClient::new(credentials, client_config));

    match result {
        Ok(client) => Some(Arc::new(client)),
        Err(CredentialsError::MissingConfig(missing)) => {
            tracing::error!(missing = ?missing, "Missing required environment variables");
            for var in &missing {
                tracing::info!("  {}", var);
            }
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize Google Cloud TTS client");
            None
        }
    }
}
