//! Commentary Query Handlers

use std::sync::Arc;

use crate::application::queries::GetCommentary;
use crate::application::snapshot::SnapshotStore;
use crate::domain::commentary::{AnnotatedVerse, MergeLabels};

/// GetCommentary Handler
///
/// 查找永不失败：两个来源都没有时返回占位文本。
pub struct GetCommentaryHandler {
    store: Arc<SnapshotStore>,
    labels: MergeLabels,
}

impl GetCommentaryHandler {
    pub fn new(store: Arc<SnapshotStore>, labels: MergeLabels) -> Self {
        Self { store, labels }
    }

    pub fn handle(&self, query: GetCommentary) -> AnnotatedVerse {
        let snapshot = self.store.current();
        let annotated = snapshot
            .merger(&self.labels)
            .lookup(&query.book, &query.chapter, &query.verse);
        tracing::debug!(
            book = %annotated.book,
            chapter = %annotated.chapter,
            verse = %annotated.verse,
            principal = annotated.sources.principal,
            supplementary = annotated.sources.supplementary,
            "Commentary resolved"
        );
        annotated
    }
}
