//! 中继路由配置

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::{
    handlers::{health, preflight, submit_issue},
    middleware::{RelayState, cors_headers_middleware},
};

/// 创建中继路由
///
/// # 端点
/// - `POST` 任意路径 - 转发请求体到上游创建 Issue
/// - `OPTIONS` 任意路径 - CORS 预检
/// - `GET /health` - 健康检查
///
/// 其余方法返回 405，请求体超过 `max_body_bytes` 返回 413，所有响应都带 CORS 头
pub fn create_relay_router(state: RelayState, max_body_bytes: usize) -> Router {
    let relay = post(submit_issue).options(preflight);

    Router::new()
        .route("/health", get(health).options(preflight))
        .route("/", relay.clone())
        .route("/{*path}", relay)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors_headers_middleware))
        .with_state(state)
}
