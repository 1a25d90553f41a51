//! Scripture Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::{GetChapters, GetPassage, GetVerses, ListBooks, SearchVerses};
use crate::application::snapshot::SnapshotStore;
use crate::domain::catalog::Testament;
use crate::domain::corpus::{find_verses_containing, resolve_reference, Passage, SearchHit, Verse};

// ============================================================================
// Response DTOs
// ============================================================================

/// 按约分组的书卷
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestamentGroup {
    pub testament: String,
    pub books: Vec<String>,
}

/// 某章的经节，按排序后的顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersesResponse {
    pub book: String,
    pub chapter: String,
    pub verses: Vec<Verse>,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListBooks Handler
pub struct ListBooksHandler {
    store: Arc<SnapshotStore>,
}

impl ListBooksHandler {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }

    /// 语料为空时各组为空
    pub fn handle(&self, _query: ListBooks) -> Vec<TestamentGroup> {
        let loaded = !self.store.current().corpus().is_empty();
        Testament::ALL
            .iter()
            .map(|testament| TestamentGroup {
                testament: testament.label().to_string(),
                books: if loaded {
                    testament.books().iter().map(|name| name.to_string()).collect()
                } else {
                    Vec::new()
                },
            })
            .collect()
    }
}

/// GetChapters Handler
pub struct GetChaptersHandler {
    store: Arc<SnapshotStore>,
}

impl GetChaptersHandler {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }

    /// 未知书卷返回空列表
    pub fn handle(&self, query: GetChapters) -> Vec<String> {
        let snapshot = self.store.current();
        snapshot
            .corpus()
            .find(&query.book)
            .map(|book| book.chapter_keys().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// GetVerses Handler
pub struct GetVersesHandler {
    store: Arc<SnapshotStore>,
}

impl GetVersesHandler {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }

    /// 未知书卷或章返回空经节
    pub fn handle(&self, query: GetVerses) -> VersesResponse {
        let snapshot = self.store.current();
        let book = snapshot.corpus().find(&query.book);
        let verses = book
            .and_then(|book| book.chapter(query.chapter.trim()))
            .map(|chapter| chapter.verses().to_vec())
            .unwrap_or_default();

        VersesResponse {
            book: book
                .map(|book| book.name().to_string())
                .unwrap_or(query.book),
            chapter: query.chapter,
            verses,
        }
    }
}

/// SearchVerses Handler
pub struct SearchVersesHandler {
    store: Arc<SnapshotStore>,
    max_results: usize,
}

impl SearchVersesHandler {
    pub fn new(store: Arc<SnapshotStore>, max_results: usize) -> Self {
        Self { store, max_results }
    }

    pub fn handle(&self, query: SearchVerses) -> Vec<SearchHit> {
        let limit = query
            .limit
            .map_or(self.max_results, |limit| limit.min(self.max_results));
        let snapshot = self.store.current();
        let hits = find_verses_containing(snapshot.corpus(), &query.query, limit);
        tracing::debug!(query = %query.query, limit, hits = hits.len(), "Search finished");
        hits
    }
}

/// GetPassage Handler
pub struct GetPassageHandler {
    store: Arc<SnapshotStore>,
}

impl GetPassageHandler {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, query: GetPassage) -> Result<Passage, ApplicationError> {
        let snapshot = self.store.current();
        Ok(resolve_reference(snapshot.corpus(), &query.reference)?)
    }
}
