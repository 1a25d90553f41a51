//! Scripture Source Port - 出站端口
//!
//! 启动 / 重载时读取原始经文与注释数据的抽象接口
//! 具体实现在 infrastructure 层（如 JSON 文件）

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// 数据源错误
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Malformed source: {0}")]
    Malformed(String),
}

/// Scripture Source Port
///
/// 返回的数据均为不透明的 JSON 键值结构，由领域层解释
#[async_trait]
pub trait ScriptureSourcePort: Send + Sync {
    /// 经文：book -> chapter -> verse -> text
    async fn load_bible(&self) -> Result<Map<String, Value>, SourceError>;

    /// 主注释：每卷书一个文档
    async fn load_principal_commentary(&self) -> Result<Vec<Value>, SourceError>;

    /// 补充注释：book -> chapter -> verse -> entry
    async fn load_supplementary_commentary(&self) -> Result<Map<String, Value>, SourceError>;

    /// 附录文档，原样透传
    async fn load_documents(&self) -> Result<Value, SourceError>;
}
