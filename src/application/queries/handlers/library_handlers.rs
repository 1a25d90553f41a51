//! Library Query Handlers

use serde_json::Value;
use std::sync::Arc;

use crate::application::queries::{GetDocuments, GetLibraryStatus};
use crate::application::snapshot::{LibraryStats, SnapshotStore};

/// GetDocuments Handler
pub struct GetDocumentsHandler {
    store: Arc<SnapshotStore>,
}

impl GetDocumentsHandler {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }

    /// 原样返回附录文档
    pub fn handle(&self, _query: GetDocuments) -> Value {
        self.store.current().documents().clone()
    }
}

/// GetLibraryStatus Handler
pub struct GetLibraryStatusHandler {
    store: Arc<SnapshotStore>,
}

impl GetLibraryStatusHandler {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, _query: GetLibraryStatus) -> LibraryStats {
        self.store.current().stats()
    }
}
