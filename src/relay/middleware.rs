//! 中继共享状态与 CORS 中间件

use std::sync::Arc;

use axum::{
    body::Body,
    http::{
        HeaderValue, Request,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware::Next,
    response::Response,
};

use super::upstream::IssueClient;

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "GET,POST,OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "x-api-key,Content-Type";

/// 中继共享状态
///
/// 启动后不可变，处理器之间无需加锁
#[derive(Clone)]
pub struct RelayState {
    /// 上游 Issue 客户端（含启动时注入的凭据）
    pub issues: Arc<IssueClient>,
}

impl RelayState {
    pub fn new(issues: IssueClient) -> Self {
        Self {
            issues: Arc::new(issues),
        }
    }
}

/// CORS 响应头中间件
///
/// 对所有响应（包括错误与 405）写入固定的三个 CORS 头，值按字面输出，不做大小写规范化
pub async fn cors_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(CORS_ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(CORS_ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
    response
}
