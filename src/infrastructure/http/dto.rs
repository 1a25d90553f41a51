//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::corpus::Verse;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Scripture DTOs
// ============================================================================

/// 检索参数
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

/// 检索结果
#[derive(Debug, Serialize)]
pub struct SearchResponse<T: Serialize> {
    pub query: String,
    pub total: usize,
    pub results: Vec<T>,
}

/// 经节列表转为有序的 节 -> 经文 对象
pub fn verse_map(verses: &[Verse]) -> Map<String, Value> {
    verses
        .iter()
        .map(|verse| (verse.key().to_string(), Value::String(verse.text().to_string())))
        .collect()
}
