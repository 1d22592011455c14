//! 核心中间件模块

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求日志中间件，同时为每个响应附加请求 ID
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let mut response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    info!(
        request_id = %request_id,
        "{} {} - {} - {}ms - User-Agent: {:?}",
        method,
        uri,
        status,
        duration.as_millis(),
        user_agent
    );

    response
}
