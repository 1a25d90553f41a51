//! JSON File Source - 文件系统数据源实现
//!
//! 实现 ScriptureSourcePort trait

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{ScriptureSourcePort, SourceError};
use crate::config::DataConfig;

/// 从本地 JSON 文件读取经文与注释
pub struct JsonFileSource {
    config: DataConfig,
}

impl JsonFileSource {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    /// 第 n 卷主注释文件路径
    fn commentary_path(&self, index: u32) -> PathBuf {
        self.config.commentary_dir.join(format!("{}.json", index))
    }
}

/// 读取并解析 JSON 文件
async fn read_json(path: &Path) -> Result<Value, SourceError> {
    let bytes = fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => SourceError::NotFound(path.display().to_string()),
        _ => SourceError::IoError(format!("{}: {}", path.display(), e)),
    })?;

    serde_json::from_slice(&bytes)
        .map_err(|e| SourceError::Malformed(format!("{}: {}", path.display(), e)))
}

/// 读取顶层必须为对象的 JSON 文件
async fn read_object(path: &Path) -> Result<Map<String, Value>, SourceError> {
    match read_json(path).await? {
        Value::Object(map) => Ok(map),
        _ => Err(SourceError::Malformed(format!(
            "{}: top-level value is not an object",
            path.display()
        ))),
    }
}

#[async_trait]
impl ScriptureSourcePort for JsonFileSource {
    async fn load_bible(&self) -> Result<Map<String, Value>, SourceError> {
        let books = read_object(&self.config.bible_path).await?;
        tracing::info!(path = ?self.config.bible_path, books = books.len(), "Bible loaded");
        Ok(books)
    }

    async fn load_principal_commentary(&self) -> Result<Vec<Value>, SourceError> {
        if !fs::try_exists(&self.config.commentary_dir)
            .await
            .unwrap_or(false)
        {
            return Err(SourceError::NotFound(
                self.config.commentary_dir.display().to_string(),
            ));
        }

        let mut documents = Vec::new();
        for index in 1..=self.config.commentary_files {
            let path = self.commentary_path(index);
            match read_json(&path).await {
                Ok(document) => documents.push(document),
                Err(SourceError::NotFound(_)) => {
                    tracing::debug!(path = ?path, "Commentary file missing, skipped");
                }
                Err(e) => {
                    tracing::warn!(path = ?path, error = %e, "Commentary file unreadable, skipped");
                }
            }
        }

        tracing::info!(
            dir = ?self.config.commentary_dir,
            files = documents.len(),
            "Principal commentary loaded"
        );
        Ok(documents)
    }

    async fn load_supplementary_commentary(&self) -> Result<Map<String, Value>, SourceError> {
        let books = read_object(&self.config.supplementary_path).await?;
        tracing::info!(
            path = ?self.config.supplementary_path,
            books = books.len(),
            "Supplementary commentary loaded"
        );
        Ok(books)
    }

    async fn load_documents(&self) -> Result<Value, SourceError> {
        let documents = read_json(&self.config.documents_path).await?;
        tracing::info!(path = ?self.config.documents_path, "Documents loaded");
        Ok(documents)
    }
}
