//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `PORT` 环境变量（仅端口）
//! 2. 环境变量（前缀 `TTS_API_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 端口环境变量，必填
pub const PORT_ENV_VAR: &str = "PORT";

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `PORT=8000`
/// - `TTS_API_SERVER__HOST=127.0.0.1`
/// - `TTS_API_SERVER__REQUEST_TIMEOUT_SECS=30`
/// - `TTS_API_TTS__TIMEOUT_SECS=20`
/// - `TTS_API_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(None, std::env::var(PORT_ENV_VAR).ok())
}

/// 从指定配置文件和端口值加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
/// - `port` - `PORT` 的原始值
pub fn load_config_from(
    config_path: Option<&Path>,
    port: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.request_timeout_secs", 120)?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("tts.base_url", "https://texttospeech.googleapis.com")?
        .set_default("tts.timeout_secs", 60)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量，层级分隔符 `__`
    builder = builder.add_source(
        Environment::with_prefix("TTS_API")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. PORT
    builder = builder.set_override_option("server.port", port)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    match config.server.port {
        None => {
            return Err(ConfigError::ValidationError(format!(
                "{} environment variable is required",
                PORT_ENV_VAR
            )))
        }
        Some(0) => {
            return Err(ConfigError::ValidationError(
                "Server port cannot be 0".to_string(),
            ))
        }
        Some(_) => {}
    }

    if config.server.request_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Request timeout cannot be 0".to_string(),
        ));
    }

    if config.tts.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS base URL cannot be empty".to_string(),
        ));
    }

    if config.tts.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "TTS timeout cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!(
        "Server: {}",
        config.server.addr().unwrap_or_else(|| "<no port>".to_string())
    );
    tracing::info!("Request Timeout: {}s", config.server.request_timeout_secs);
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("TTS Base URL: {}", config.tts.base_url);
    tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.port = Some(8000);
        config
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_missing_port() {
        let err = validate_config(&AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("PORT environment variable is required"));
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = valid_config();
        config.server.port = Some(0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_timeouts() {
        let mut config = valid_config();
        config.server.request_timeout_secs = 0;
        assert!(validate_config(&config).is_err());

        let mut config = valid_config();
        config.tts.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_base_url() {
        let mut config = valid_config();
        config.tts.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_port_is_required() {
        let result = load_config_from(None, None);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_port_from_value() {
        let config = load_config_from(None, Some("8080".to_string())).unwrap();
        assert_eq!(config.server.port, Some(8080));
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(load_config_from(None, Some("not-a-port".to_string())).is_err());
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
request_timeout_secs = 15

[tts]
timeout_secs = 10
"#
        )
        .unwrap();

        let config = load_config_from(Some(file.path()), Some("9000".to_string())).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, Some(9000));
        assert_eq!(config.server.request_timeout_secs, 15);
        assert_eq!(config.tts.timeout_secs, 10);
        assert_eq!(config.tts.base_url, "https://texttospeech.googleapis.com");
    }
}
