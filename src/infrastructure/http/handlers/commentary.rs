//! Commentary HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::GetCommentary;
use crate::domain::commentary::AnnotatedVerse;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::state::AppState;

/// 合并后的经节注释
pub async fn get_commentary(
    State(state): State<Arc<AppState>>,
    Path((book, chapter, verse)): Path<(String, String, String)>,
) -> Json<ApiResponse<AnnotatedVerse>> {
    let annotated = state.get_commentary_handler.handle(GetCommentary {
        book,
        chapter,
        verse,
    });
    Json(ApiResponse::success(annotated))
}
