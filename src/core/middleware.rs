//! 核心中间件模块

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求日志中间件
///
/// 沿用调用方给出的 `x-request-id`，没有则生成一个，并写回响应头。
pub async fn request_logging(mut req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        });
    req.headers_mut()
        .insert(HeaderName::from_static(REQUEST_ID_HEADER), request_id.clone());

    let mut response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();
    let request_id_str = request_id.to_str().unwrap_or("unknown").to_string();

    if status.is_server_error() {
        warn!(
            request_id = %request_id_str,
            "{} {} - {} - {}ms",
            method,
            uri,
            status,
            duration.as_millis()
        );
    } else {
        info!(
            request_id = %request_id_str,
            "{} {} - {} - {}ms",
            method,
            uri,
            status,
            duration.as_millis()
        );
    }

    response
        .headers_mut()
        .insert(HeaderName::from_static(REQUEST_ID_HEADER), request_id);
    response
}
