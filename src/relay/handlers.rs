//! 中继 HTTP 处理器

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use uuid::Uuid;

use super::{
    error::RelayError,
    middleware::RelayState,
    types::{HealthResponse, RelayEnvelope},
};

/// OPTIONS *
/// CORS 预检：固定返回 200 与空响应体，CORS 头由中间件写入
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// POST *
/// 原样转发请求体到上游创建 Issue
pub async fn submit_issue(State(state): State<RelayState>, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, body_len = body.len(), "收到 Issue 提交");

    match state.issues.create_issue(body).await {
        Ok(upstream) if upstream.is_success() => {
            match upstream.json.get("html_url").and_then(|v| v.as_str()) {
                Some(url) => tracing::info!(%request_id, "Issue 已创建: {}", url),
                None => tracing::info!(%request_id, status = %upstream.status, "上游已接受提交"),
            }
            (StatusCode::CREATED, Json(RelayEnvelope::ok(upstream.json))).into_response()
        }
        Ok(upstream) => {
            tracing::warn!(
                %request_id,
                status = %upstream.status,
                "上游拒绝了 Issue 提交: {}",
                upstream.json.get("message").and_then(|v| v.as_str()).unwrap_or("-")
            );
            let envelope = RelayEnvelope::rejected(upstream.status.as_u16(), upstream.json);
            (StatusCode::BAD_GATEWAY, Json(envelope)).into_response()
        }
        Err(e) => {
            match &e {
                RelayError::Decode { preview, .. } => {
                    tracing::error!(%request_id, "{}，响应体: {}", e, preview)
                }
                _ => tracing::error!(%request_id, "Issue 中继失败: {}", e),
            }
            (e.status_code(), Json(e.to_error_response())).into_response()
        }
    }
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}
