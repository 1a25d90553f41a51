//! Library Snapshot - 只读数据快照
//!
//! 启动时构建一次，之后只读；重载时整体替换，
//! 正在处理的请求继续持有旧快照直到结束。

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

use crate::domain::commentary::{AnnotationMerger, CommentarySource, MergeLabels, SourceKind};
use crate::domain::corpus::Corpus;

/// 快照 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SnapshotId(Uuid);

impl SnapshotId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SnapshotId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 快照统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryStats {
    pub snapshot_id: SnapshotId,
    pub loaded_at: String,
    pub books: usize,
    pub verses: usize,
    pub principal_books: usize,
    pub supplementary_books: usize,
    pub has_documents: bool,
}

/// 某一时刻加载的全部数据
#[derive(Debug)]
pub struct LibrarySnapshot {
    id: SnapshotId,
    loaded_at: DateTime<Utc>,
    corpus: Corpus,
    principal: CommentarySource,
    supplementary: CommentarySource,
    documents: Value,
}

impl LibrarySnapshot {
    pub fn new(
        corpus: Corpus,
        principal: CommentarySource,
        supplementary: CommentarySource,
        documents: Value,
    ) -> Self {
        Self {
            id: SnapshotId::new(),
            loaded_at: Utc::now(),
            corpus,
            principal,
            supplementary,
            documents,
        }
    }

    /// 没有任何数据的快照
    pub fn empty() -> Self {
        Self::new(
            Corpus::empty(),
            CommentarySource::new(SourceKind::Principal),
            CommentarySource::new(SourceKind::Supplementary),
            Value::Object(Default::default()),
        )
    }

    pub fn id(&self) -> SnapshotId {
        self.id
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn principal(&self) -> &CommentarySource {
        &self.principal
    }

    pub fn supplementary(&self) -> &CommentarySource {
        &self.supplementary
    }

    pub fn documents(&self) -> &Value {
        &self.documents
    }

    pub fn merger<'a>(&'a self, labels: &'a MergeLabels) -> AnnotationMerger<'a> {
        AnnotationMerger::new(&self.principal, &self.supplementary, labels)
    }

    pub fn stats(&self) -> LibraryStats {
        let has_documents = match &self.documents {
            Value::Null => false,
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => true,
        };
        LibraryStats {
            snapshot_id: self.id,
            loaded_at: self.loaded_at.to_rfc3339(),
            books: self.corpus.len(),
            verses: self.corpus.verse_count(),
            principal_books: self.principal.book_count(),
            supplementary_books: self.supplementary.book_count(),
            has_documents,
        }
    }
}

/// 当前快照的持有者
///
/// 读者拿到的是 Arc 克隆，替换不会阻塞已在进行的查询。
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<LibrarySnapshot>>,
}

impl SnapshotStore {
    pub fn new(snapshot: LibrarySnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub fn current(&self) -> Arc<LibrarySnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 替换快照，返回旧快照
    pub fn replace(&self, snapshot: LibrarySnapshot) -> Arc<LibrarySnapshot> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(snapshot))
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(LibrarySnapshot::empty())
    }
}
