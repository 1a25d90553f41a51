//! Scripture HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::application::{
    GetChapters, GetPassage, GetVerses, ListBooks, SearchVerses, TestamentGroup,
};
use crate::domain::corpus::{Passage, SearchHit};
use crate::infrastructure::http::dto::{verse_map, ApiResponse, SearchParams, SearchResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 书卷目录
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<TestamentGroup>>> {
    Json(ApiResponse::success(state.list_books_handler.handle(ListBooks)))
}

/// 某卷书的章列表
pub async fn list_chapters(
    State(state): State<Arc<AppState>>,
    Path(book): Path<String>,
) -> Json<ApiResponse<Vec<String>>> {
    let chapters = state.get_chapters_handler.handle(GetChapters { book });
    Json(ApiResponse::success(chapters))
}

/// 某章的经节（有序对象）
pub async fn list_verses(
    State(state): State<Arc<AppState>>,
    Path((book, chapter)): Path<(String, String)>,
) -> Json<ApiResponse<Map<String, Value>>> {
    let response = state.get_verses_handler.handle(GetVerses { book, chapter });
    Json(ApiResponse::success(verse_map(&response.verses)))
}

/// 全文检索
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<ApiResponse<SearchResponse<SearchHit>>> {
    let results = state.search_handler.handle(SearchVerses {
        query: params.q.clone(),
        limit: params.limit,
    });
    Json(ApiResponse::success(SearchResponse {
        query: params.q,
        total: results.len(),
        results,
    }))
}

/// 按引用取经文
pub async fn get_reference(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
) -> Result<Json<ApiResponse<Passage>>, ApiError> {
    let passage = state.get_passage_handler.handle(GetPassage { reference })?;
    Ok(Json(ApiResponse::success(passage)))
}
