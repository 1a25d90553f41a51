//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    ReloadLibraryHandler,
    // Query handlers
    GetChaptersHandler, GetCommentaryHandler, GetDocumentsHandler, GetLibraryStatusHandler,
    GetPassageHandler, GetVersesHandler, ListBooksHandler, SearchVersesHandler,
    // Ports & snapshot
    ScriptureSourcePort, SnapshotStore,
};
use crate::config::AppConfig;

/// 应用状态
///
/// 所有 handler 共享同一个 SnapshotStore
pub struct AppState {
    pub store: Arc<SnapshotStore>,

    // ========== Command Handlers ==========
    pub reload_handler: ReloadLibraryHandler,

    // ========== Query Handlers ==========
    pub list_books_handler: ListBooksHandler,
    pub get_chapters_handler: GetChaptersHandler,
    pub get_verses_handler: GetVersesHandler,
    pub get_commentary_handler: GetCommentaryHandler,
    pub search_handler: SearchVersesHandler,
    pub get_passage_handler: GetPassageHandler,
    pub get_documents_handler: GetDocumentsHandler,
    pub library_status_handler: GetLibraryStatusHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        config: &AppConfig,
        source: Arc<dyn ScriptureSourcePort>,
        store: Arc<SnapshotStore>,
    ) -> Self {
        Self {
            store: store.clone(),

            // Command handlers
            reload_handler: ReloadLibraryHandler::new(source, store.clone()),

            // Query handlers
            list_books_handler: ListBooksHandler::new(store.clone()),
            get_chapters_handler: GetChaptersHandler::new(store.clone()),
            get_verses_handler: GetVersesHandler::new(store.clone()),
            get_commentary_handler: GetCommentaryHandler::new(
                store.clone(),
                config.commentary.labels(),
            ),
            search_handler: SearchVersesHandler::new(store.clone(), config.search.max_results),
            get_passage_handler: GetPassageHandler::new(store.clone()),
            get_documents_handler: GetDocumentsHandler::new(store.clone()),
            library_status_handler: GetLibraryStatusHandler::new(store),
        }
    }
}
