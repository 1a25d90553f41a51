//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::commentary::{DEFAULT_SUPPLEMENTARY_LABEL, NO_COMMENTARY};
use crate::domain::corpus::DEFAULT_MAX_RESULTS;

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
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `BIBLIA_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `BIBLIA_SERVER__PORT=8080`
/// - `BIBLIA_DATA__BIBLE_PATH=/srv/data/RV1960.json`
/// - `BIBLIA_SEARCH__MAX_RESULTS=50`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("data.bible_path", "data/RV1960.json")?
        .set_default("data.commentary_dir", "data/comment")?
        .set_default("data.commentary_files", 66)?
        .set_default("data.supplementary_path", "data/cba.json")?
        .set_default("data.documents_path", "data/cba_append.json")?
        .set_default("search.max_results", DEFAULT_MAX_RESULTS as u64)?
        .set_default("commentary.supplementary_label", DEFAULT_SUPPLEMENTARY_LABEL)?
        .set_default("commentary.empty_message", NO_COMMENTARY)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: BIBLIA_DATA__COMMENTARY_DIR=/srv/comment
    builder = builder.add_source(
        Environment::with_prefix("BIBLIA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.data.bible_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Bible path cannot be empty".to_string(),
        ));
    }

    if config.search.max_results == 0 {
        return Err(ConfigError::ValidationError(
            "Search max_results must be greater than 0".to_string(),
        ));
    }

    if config.commentary.supplementary_label.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Supplementary commentary label cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Bible: {:?}", config.data.bible_path);
    tracing::info!(
        "Commentary: {:?} ({} files)",
        config.data.commentary_dir,
        config.data.commentary_files
    );
    tracing::info!("Supplementary: {:?}", config.data.supplementary_path);
    tracing::info!("Documents: {:?}", config.data.documents_path);
    tracing::info!("Search Max Results: {}", config.search.max_results);
    tracing::info!("Supplementary Label: {}", config.commentary.supplementary_label);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_max_results() {
        let mut config = AppConfig::default();
        config.search.max_results = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_bible_path() {
        let mut config = AppConfig::default();
        config.data.bible_path = Default::default();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_blank_label() {
        let mut config = AppConfig::default();
        config.commentary.supplementary_label = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 8088\n\n[search]\nmax_results = 25\n\n[commentary]\nsupplementary_label = \"Adventista\""
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.search.max_results, 25);
        assert_eq!(config.commentary.supplementary_label, "Adventista");
        assert_eq!(config.data.commentary_files, 66);
    }
}
