//! 中继错误类型

use axum::http::StatusCode;

use super::types::ErrorResponse;

/// 中继失败原因
///
/// 上游返回非 2xx 但响应体是合法 JSON 时不属于错误，
/// 由 [`super::upstream::UpstreamResponse`] 携带状态码返回
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// 未配置上游凭据
    #[error("未配置上游凭据（githubToken 或 GITHUB_PAT）")]
    MissingCredential,

    /// 上游超时
    #[error("上游请求超时")]
    Timeout(#[source] reqwest::Error),

    /// DNS / TLS / 连接 / 读取失败
    #[error("无法连接上游: {0}")]
    Transport(#[source] reqwest::Error),

    /// 上游响应体不是 JSON
    #[error("上游返回了非 JSON 响应 (HTTP {status})")]
    Decode {
        status: u16,
        /// 响应体预览，仅用于日志
        preview: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RelayError {
    /// 按 reqwest 错误类型区分超时与其他传输失败
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }

    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Transport(_) | Self::Decode { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    /// 错误类型标识
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::Timeout(_) => "upstream_timeout",
            Self::Transport(_) => "upstream_unreachable",
            Self::Decode { .. } => "upstream_invalid_response",
        }
    }

    /// 转换为错误响应体
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.error_type(), self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_mapping() {
        let err = RelayError::MissingCredential;
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_error_response().error.error_type, "missing_credential");
    }

    #[test]
    fn test_decode_mapping() {
        let source = serde_json::from_slice::<serde_json::Value>(b"<html>").unwrap_err();
        let err = RelayError::Decode {
            status: 500,
            preview: "<html>".to_string(),
            source,
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_type(), "upstream_invalid_response");
        assert!(err.to_string().contains("HTTP 500"));
    }
}
