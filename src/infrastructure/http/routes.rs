//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                                     GET   健康检查
//! - /api/books                                    GET   书卷目录（按约分组）
//! - /api/books/:book/chapters                     GET   章列表
//! - /api/books/:book/chapters/:chapter/verses     GET   经节
//! - /api/commentary/:book/:chapter/:verse         GET   合并注释
//! - /api/search?q=                                GET   全文检索
//! - /api/reference/:reference                     GET   按引用取经文
//! - /api/documents                                GET   附录文档
//! - /api/library                                  GET   快照状态
//! - /api/library/reload                           POST  重新加载数据源

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/books", book_routes())
        .route(
            "/commentary/:book/:chapter/:verse",
            get(handlers::get_commentary),
        )
        .route("/search", get(handlers::search))
        .route("/reference/:reference", get(handlers::get_reference))
        .route("/documents", get(handlers::get_documents))
        .nest("/library", library_routes())
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_books))
        .route("/:book/chapters", get(handlers::list_chapters))
        .route(
            "/:book/chapters/:chapter/verses",
            get(handlers::list_verses),
        )
}

/// Library 路由
fn library_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::library_status))
        .route("/reload", post(handlers::reload_library))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ReloadLibrary, ReloadTrigger, ScriptureSourcePort, SnapshotStore, SourceError,
    };
    use crate::config::AppConfig;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Map, Value};
    use tower::util::ServiceExt;

    struct FixtureSource;

    #[async_trait]
    impl ScriptureSourcePort for FixtureSource {
        async fn load_bible(&self) -> Result<Map<String, Value>, SourceError> {
            match json!({
                "Juan": {
                    "3": {"17": "Porque no envió Dios a su Hijo", "16": "Porque de tal manera amó Dios al mundo"},
                    "10": {"10": "Yo he venido para que tengan vida", "2": "Mas el que entra por la puerta, el pastor de las ovejas es"},
                    "1": {"1": "En el principio era el Verbo"}
                }
            }) {
                Value::Object(map) => Ok(map),
                _ => unreachable!(),
            }
        }

        async fn load_principal_commentary(&self) -> Result<Vec<Value>, SourceError> {
            Ok(vec![json!({
                "libro": "Juan",
                "comentarios": [{"capitulo": "3", "versiculos": [
                    {"versiculo": "16", "comentario": "El amor de Dios.", "referencia": ["Rom 5:8"]}
                ]}]
            })])
        }

        async fn load_supplementary_commentary(&self) -> Result<Map<String, Value>, SourceError> {
            Err(SourceError::NotFound("cba.json".to_string()))
        }

        async fn load_documents(&self) -> Result<Value, SourceError> {
            Ok(json!([{"titulo": "Apéndice"}]))
        }
    }

    async fn app() -> Router {
        let state = AppState::new(
            &AppConfig::default(),
            Arc::new(FixtureSource),
            Arc::new(SnapshotStore::default()),
        );
        state
            .reload_handler
            .handle(ReloadLibrary {
                trigger: ReloadTrigger::Startup,
            })
            .await;
        create_routes().with_state(Arc::new(state))
    }

    async fn call(app: Router, method: &str, uri: &str) -> Value {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let body = call(app().await, "GET", "/api/ping").await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_books_and_chapters() {
        let body = call(app().await, "GET", "/api/books").await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"][1]["testament"], "Nuevo Testamento");

        let body = call(app().await, "GET", "/api/books/S.%20Juan/chapters").await;
        assert_eq!(body["data"], json!(["1", "3", "10"]));
    }

    #[tokio::test]
    async fn test_verses_keep_numeric_order() {
        let body = call(app().await, "GET", "/api/books/Juan/chapters/10/verses").await;
        let keys: Vec<&String> = body["data"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["2", "10"]);

        let body = call(app().await, "GET", "/api/books/Juan/chapters/3/verses").await;
        let keys: Vec<&String> = body["data"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["16", "17"]);
    }

    #[tokio::test]
    async fn test_commentary() {
        let body = call(app().await, "GET", "/api/commentary/Juan/3/16").await;
        assert_eq!(body["data"]["commentary"], "El amor de Dios.");
        assert_eq!(body["data"]["sources"]["principal"], true);
        assert_eq!(body["data"]["reference_list"], json!(["Rom 5:8"]));
    }

    #[tokio::test]
    async fn test_search() {
        let body = call(app().await, "GET", "/api/search?q=PORQUE").await;
        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["results"][0]["verse"], "16");
    }

    #[tokio::test]
    async fn test_reference_found_and_invalid() {
        let body = call(app().await, "GET", "/api/reference/Juan%203:16").await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["text"], "Porque de tal manera amó Dios al mundo");

        let body = call(app().await, "GET", "/api/reference/Juan%209:1").await;
        assert_eq!(body["errno"], 404);

        let body = call(app().await, "GET", "/api/reference/nada").await;
        assert_eq!(body["errno"], 400);
    }

    #[tokio::test]
    async fn test_documents_and_library() {
        let body = call(app().await, "GET", "/api/documents").await;
        assert_eq!(body["data"][0]["titulo"], "Apéndice");

        let app = app().await;
        let before = call(app.clone(), "GET", "/api/library").await;
        assert_eq!(before["data"]["verses"], 5);

        let reloaded = call(app.clone(), "POST", "/api/library/reload").await;
        assert_eq!(
            reloaded["data"]["previous_snapshot"],
            before["data"]["snapshot_id"]
        );
        assert_eq!(reloaded["data"]["warnings"].as_array().unwrap().len(), 1);
    }
}
