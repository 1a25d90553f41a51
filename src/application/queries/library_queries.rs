//! Library Queries

/// 获取附录文档
#[derive(Debug, Clone, Default)]
pub struct GetDocuments;

/// 获取当前快照状态
#[derive(Debug, Clone, Default)]
pub struct GetLibraryStatus;
