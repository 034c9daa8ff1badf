//! 上游 Issue API 客户端
//!
//! 每次提交只发起一次上游 POST，不重试、不去重

use bytes::Bytes;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION},
};
use serde_json::Value;

use super::error::RelayError;
use crate::common::body_preview;
use crate::http_client::build_client;
use crate::model::config::Config;

/// GitHub REST API 推荐的 Accept 头
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// 日志中响应体预览的最大字节数
const PREVIEW_MAX_BYTES: usize = 256;

/// 上游响应（状态码 + 已解码 JSON）
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub json: Value,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Issue 创建客户端
pub struct IssueClient {
    client: Client,
    issues_url: String,
    token: Option<String>,
}

impl IssueClient {
    pub fn new(client: Client, issues_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client,
            issues_url: issues_url.into(),
            token,
        }
    }

    /// 根据配置构建客户端，凭据由调用方在启动时解析后注入
    pub fn from_config(config: &Config, token: Option<String>) -> anyhow::Result<Self> {
        let client = build_client(
            config.proxy_url.as_deref(),
            config.upstream_timeout_secs,
            &config.user_agent,
        )?;
        Ok(Self::new(client, config.issues_url()?, token))
    }

    pub fn issues_url(&self) -> &str {
        &self.issues_url
    }

    pub fn has_credential(&self) -> bool {
        self.token.is_some()
    }

    /// 原样转发请求体创建 Issue
    ///
    /// 非 2xx 但响应体为 JSON 时返回 `Ok`，由调用方根据状态码区分
    pub async fn create_issue(&self, body: Bytes) -> Result<UpstreamResponse, RelayError> {
        let token = self.token.as_deref().ok_or(RelayError::MissingCredential)?;

        let response = self
            .client
            .post(&self.issues_url)
            .header(AUTHORIZATION, format!("token {}", token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .body(body)
            .send()
            .await
            .map_err(RelayError::from_transport)?;

        let status = response.status();
        let raw = response.bytes().await.map_err(RelayError::from_transport)?;

        let json = serde_json::from_slice(&raw).map_err(|source| RelayError::Decode {
            status: status.as_u16(),
            preview: body_preview(&raw, PREVIEW_MAX_BYTES),
            source,
        })?;

        Ok(UpstreamResponse { status, json })
    }
}
