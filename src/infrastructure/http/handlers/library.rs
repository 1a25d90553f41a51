//! Library HTTP Handlers

use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{
    GetDocuments, GetLibraryStatus, LibraryStats, ReloadLibrary, ReloadLibraryResponse,
    ReloadTrigger,
};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::state::AppState;

/// 附录文档，原样透传
pub async fn get_documents(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Value>> {
    Json(ApiResponse::success(
        state.get_documents_handler.handle(GetDocuments),
    ))
}

/// 当前快照状态
pub async fn library_status(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<LibraryStats>> {
    Json(ApiResponse::success(
        state.library_status_handler.handle(GetLibraryStatus),
    ))
}

/// 重新加载数据源
pub async fn reload_library(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<ReloadLibraryResponse>> {
    let response = state
        .reload_handler
        .handle(ReloadLibrary {
            trigger: ReloadTrigger::Manual,
        })
        .await;
    Json(ApiResponse::success(response))
}
