//! Ping Handler
//!
//! 健康检查，同时报告当前快照

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::application::SnapshotId;
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub snapshot_id: SnapshotId,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        snapshot_id: state.store.current().id(),
    })
}
