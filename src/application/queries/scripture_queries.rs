//! Scripture Queries

/// 列出正典目录（按约分组）
#[derive(Debug, Clone, Default)]
pub struct ListBooks;

/// 获取某卷书的章列表
#[derive(Debug, Clone)]
pub struct GetChapters {
    pub book: String,
}

/// 获取某章的经节
#[derive(Debug, Clone)]
pub struct GetVerses {
    pub book: String,
    pub chapter: String,
}

/// 全文检索
#[derive(Debug, Clone)]
pub struct SearchVerses {
    pub query: String,
    /// 调用方要求的上限，不会超过配置上限
    pub limit: Option<usize>,
}

/// 按引用获取单节或节区间
#[derive(Debug, Clone)]
pub struct GetPassage {
    pub reference: String,
}
