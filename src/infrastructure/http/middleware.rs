//! HTTP Middleware
//!
//! - 请求 ID：读取或生成 `x-request-id`，写入日志 span 与响应头
//! - HTTP 状态码错误日志

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// 请求 ID 头
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求 ID 中间件
///
/// 客户端传入的 `x-request-id` 原样沿用，否则生成 UUID v4
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!("request", request_id = %request_id);
    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// 4xx/5xx 响应日志中间件
///
/// 业务错误的详细原因由 `ApiError` 记录，这里只记录请求行、状态码与耗时
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    match status.as_u16() {
        500..=599 => tracing::error!(
            %method,
            %path,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        ),
        400..=499 => tracing::warn!(
            %method,
            %path,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        ),
        _ => {}
    }

    response
}
