//! Library Command Handlers

use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::application::commands::ReloadLibrary;
use crate::application::ports::{ScriptureSourcePort, SourceError};
use crate::application::snapshot::{LibrarySnapshot, LibraryStats, SnapshotId, SnapshotStore};
use crate::domain::commentary::{principal_from_documents, supplementary_from_map};
use crate::domain::corpus::reorder;

// ============================================================================
// Response DTOs
// ============================================================================

/// 重载结果
#[derive(Debug, Clone, Serialize)]
pub struct ReloadLibraryResponse {
    pub stats: LibraryStats,
    pub previous_snapshot: SnapshotId,
    /// 降级为空的数据源
    pub warnings: Vec<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// ReloadLibrary Handler
///
/// 任一数据源缺失或畸形都只会让该来源为空，不会让重载失败。
pub struct ReloadLibraryHandler {
    source: Arc<dyn ScriptureSourcePort>,
    store: Arc<SnapshotStore>,
}

impl ReloadLibraryHandler {
    pub fn new(source: Arc<dyn ScriptureSourcePort>, store: Arc<SnapshotStore>) -> Self {
        Self { source, store }
    }

    pub async fn handle(&self, command: ReloadLibrary) -> ReloadLibraryResponse {
        tracing::info!(trigger = command.trigger.as_str(), "Reloading library");

        let mut warnings = Vec::new();

        let bible = degrade(
            "bible",
            self.source.load_bible().await,
            Map::new,
            &mut warnings,
        );
        let principal = degrade(
            "principal commentary",
            self.source.load_principal_commentary().await,
            Vec::new,
            &mut warnings,
        );
        let supplementary = degrade(
            "supplementary commentary",
            self.source.load_supplementary_commentary().await,
            Map::new,
            &mut warnings,
        );
        let documents = degrade(
            "documents",
            self.source.load_documents().await,
            || Value::Object(Map::new()),
            &mut warnings,
        );

        // 重排与索引是纯 CPU 工作，放到阻塞线程池
        let built = tokio::task::spawn_blocking(move || {
            LibrarySnapshot::new(
                reorder(&bible),
                principal_from_documents(&principal),
                supplementary_from_map(&supplementary),
                documents,
            )
        })
        .await;

        let snapshot = match built {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!(error = %e, "Snapshot build failed, keeping current snapshot");
                warnings.push(format!("snapshot: {}", e));
                let current = self.store.current();
                return ReloadLibraryResponse {
                    stats: current.stats(),
                    previous_snapshot: current.id(),
                    warnings,
                };
            }
        };
        let stats = snapshot.stats();
        let previous = self.store.replace(snapshot);

        tracing::info!(
            snapshot_id = %stats.snapshot_id,
            previous_snapshot = %previous.id(),
            books = stats.books,
            verses = stats.verses,
            principal_books = stats.principal_books,
            supplementary_books = stats.supplementary_books,
            degraded = warnings.len(),
            "Library snapshot replaced"
        );

        ReloadLibraryResponse {
            stats,
            previous_snapshot: previous.id(),
            warnings,
        }
    }
}

/// 数据源失败时记录警告并返回空值
fn degrade<T>(
    name: &str,
    loaded: Result<T, SourceError>,
    empty: impl FnOnce() -> T,
    warnings: &mut Vec<String>,
) -> T {
    match loaded {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(source = name, error = %e, "Source unavailable, using empty data");
            warnings.push(format!("{}: {}", name, e));
            empty()
        }
    }
}
