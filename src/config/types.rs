//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::commentary::{MergeLabels, DEFAULT_SUPPLEMENTARY_LABEL, NO_COMMENTARY};
use crate::domain::corpus::DEFAULT_MAX_RESULTS;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 数据文件配置
    #[serde(default)]
    pub data: DataConfig,

    /// 检索配置
    #[serde(default)]
    pub search: SearchConfig,

    /// 注释合并配置
    #[serde(default)]
    pub commentary: CommentaryConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 数据文件配置
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// 经文文件
    #[serde(default = "default_bible_path")]
    pub bible_path: PathBuf,

    /// 主注释目录，内含 1.json .. N.json
    #[serde(default = "default_commentary_dir")]
    pub commentary_dir: PathBuf,

    /// 主注释文件数（每卷一个）
    #[serde(default = "default_commentary_files")]
    pub commentary_files: u32,

    /// 补充注释文件
    #[serde(default = "default_supplementary_path")]
    pub supplementary_path: PathBuf,

    /// 附录文档文件
    #[serde(default = "default_documents_path")]
    pub documents_path: PathBuf,
}

fn default_bible_path() -> PathBuf {
    PathBuf::from("data/RV1960.json")
}

fn default_commentary_dir() -> PathBuf {
    PathBuf::from("data/comment")
}

fn default_commentary_files() -> u32 {
    66
}

fn default_supplementary_path() -> PathBuf {
    PathBuf::from("data/cba.json")
}

fn default_documents_path() -> PathBuf {
    PathBuf::from("data/cba_append.json")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            bible_path: default_bible_path(),
            commentary_dir: default_commentary_dir(),
            commentary_files: default_commentary_files(),
            supplementary_path: default_supplementary_path(),
            documents_path: default_documents_path(),
        }
    }
}

/// 检索配置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// 单次检索最大结果数
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

/// 注释合并配置
#[derive(Debug, Clone, Deserialize)]
pub struct CommentaryConfig {
    /// 合并文本中补充注释的标签
    #[serde(default = "default_supplementary_label")]
    pub supplementary_label: String,

    /// 没有注释时的文本
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
}

fn default_supplementary_label() -> String {
    DEFAULT_SUPPLEMENTARY_LABEL.to_string()
}

fn default_empty_message() -> String {
    NO_COMMENTARY.to_string()
}

impl Default for CommentaryConfig {
    fn default() -> Self {
        Self {
            supplementary_label: default_supplementary_label(),
            empty_message: default_empty_message(),
        }
    }
}

impl CommentaryConfig {
    pub fn labels(&self) -> MergeLabels {
        MergeLabels {
            supplementary: self.supplementary_label.clone(),
            empty_message: self.empty_message.clone(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
