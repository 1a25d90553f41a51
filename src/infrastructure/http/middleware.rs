//! HTTP Middleware
//!
//! 请求耗时与 HTTP 状态码错误日志

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// HTTP 状态码错误日志中间件
///
/// 业务错误（errno != 0）走 HTTP 200，在 ApiError::into_response() 中记录；
/// 这里只处理框架层面的 4xx / 5xx，例如路由不存在或参数提取失败。
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(method = %method, path = %path, status, elapsed_ms, "HTTP server error");
    } else if response.status().is_client_error() {
        tracing::warn!(method = %method, path = %path, status, elapsed_ms, "HTTP client error");
    } else {
        tracing::debug!(method = %method, path = %path, status, elapsed_ms, "HTTP request served");
    }

    response
}
