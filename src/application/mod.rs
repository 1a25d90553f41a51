//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ScriptureSource）
//! - snapshot: 只读数据快照及其持有者
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod snapshot;

// Re-exports
pub use commands::{
    handlers::{ReloadLibraryHandler, ReloadLibraryResponse},
    ReloadLibrary, ReloadTrigger,
};

pub use error::ApplicationError;

pub use ports::{ScriptureSourcePort, SourceError};

pub use queries::{
    handlers::{
        GetChaptersHandler, GetCommentaryHandler, GetDocumentsHandler, GetLibraryStatusHandler,
        GetPassageHandler, GetVersesHandler, ListBooksHandler, SearchVersesHandler,
        TestamentGroup, VersesResponse,
    },
    GetChapters, GetCommentary, GetDocuments, GetLibraryStatus, GetPassage, GetVerses, ListBooks,
    SearchVerses,
};

pub use snapshot::{LibrarySnapshot, LibraryStats, SnapshotId, SnapshotStore};
