//! Commentary Queries

/// 获取某节合并后的注释
#[derive(Debug, Clone)]
pub struct GetCommentary {
    pub book: String,
    pub chapter: String,
    pub verse: String,
}
